use http::HeaderMap;
use tracing::warn;

pub const METHOD_KEY: &str = "method";
pub const URL_KEY: &str = "url";
pub const ADDITIONAL_HEADERS_KEY: &str = "additionalheaders";
pub const BODY_KEY: &str = "body";

/// Caller supplied description of one backend call, before any validation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CallMetadata<'a> {
    pub method: Option<&'a str>,
    pub url: Option<&'a str>,
    pub additional_headers: Option<&'a str>,
    pub body: Option<&'a str>,
}

impl<'a> From<&'a HeaderMap> for CallMetadata<'a> {
    fn from(headers: &'a HeaderMap) -> Self {
        CallMetadata {
            method: lookup(headers, METHOD_KEY),
            url: lookup(headers, URL_KEY),
            additional_headers: lookup(headers, ADDITIONAL_HEADERS_KEY),
            body: lookup(headers, BODY_KEY),
        }
    }
}

fn lookup<'a>(headers: &'a HeaderMap, key: &str) -> Option<&'a str> {
    let value = headers.get(key)?;
    match std::str::from_utf8(value.as_bytes()) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Ignoring {key} metadata that is not valid UTF-8: {err}");
            None
        }
    }
}
