use std::{collections::HashMap, ops::Deref};

use bytes::Bytes;
use tracing::warn;
use url::Url;

use crate::call_descriptor::{
    call_descriptor_error::CallDescriptorError, call_metadata::CallMetadata,
};

pub const DEFAULT_METHOD: &str = "GET";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallDescriptorHeaders(pub HashMap<String, String>);

impl Deref for CallDescriptorHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for CallDescriptorHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr.into_iter().collect();
        CallDescriptorHeaders(map)
    }
}

impl CallDescriptorHeaders {
    /// Parses a JSON object of header name to header value.
    ///
    /// Anything that is not such an object yields an empty mapping, so a bad
    /// `additionalHeaders` value never aborts the call.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let raw = match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return CallDescriptorHeaders::default(),
        };

        match serde_json::from_str::<HashMap<String, String>>(raw) {
            Ok(map) => CallDescriptorHeaders(map),
            Err(err) => {
                warn!("Ignoring additional headers {:?}: {}", raw, err);
                CallDescriptorHeaders::default()
            }
        }
    }
}

/// Validated intent for exactly one backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallDescriptor {
    pub method: String,
    pub target: Url,
    pub extra_headers: CallDescriptorHeaders,
    pub body: Option<Bytes>,
}

impl CallDescriptor {
    pub fn build(metadata: CallMetadata<'_>) -> Result<Self, CallDescriptorError> {
        let method = match metadata.method {
            Some(method) if !method.is_empty() => method.to_uppercase(),
            _ => DEFAULT_METHOD.to_string(),
        };

        let target = parse_target(metadata.url)?;

        let extra_headers = CallDescriptorHeaders::parse_lenient(metadata.additional_headers);

        let body = metadata
            .body
            .filter(|body| !body.is_empty())
            .map(|body| Bytes::copy_from_slice(body.as_bytes()));

        Ok(CallDescriptor {
            method,
            target,
            extra_headers,
            body,
        })
    }
}

fn parse_target(raw: Option<&str>) -> Result<Url, CallDescriptorError> {
    let raw = raw
        .filter(|raw| !raw.is_empty())
        .ok_or(CallDescriptorError::MissingTarget)?;

    let target = Url::parse(raw).map_err(|source| CallDescriptorError::MalformedTarget {
        input: raw.to_string(),
        source,
    })?;

    let has_host = target.host_str().is_some_and(|host| !host.is_empty());
    if target.scheme().is_empty() || !has_host {
        return Err(CallDescriptorError::IncompleteTarget(raw.to_string()));
    }

    Ok(target)
}
