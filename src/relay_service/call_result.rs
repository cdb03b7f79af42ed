use std::collections::BTreeMap;

use http::HeaderMap;
use serde::Serialize;

/// Captured outcome of one backend call, shaped for the JSON envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallResult {
    #[serde(rename = "StatusCode", skip_serializing_if = "is_zero")]
    pub status_code: u16,

    #[serde(rename = "URI", skip_serializing_if = "String::is_empty")]
    pub uri: String,

    #[serde(rename = "Headers", skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Vec<String>>,

    #[serde(rename = "Body", skip_serializing_if = "String::is_empty")]
    pub body: String,
}

fn is_zero(status_code: &u16) -> bool {
    *status_code == 0
}

impl CallResult {
    /// Renders the result the way it goes back to the caller: three space indent.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Groups response headers by canonical name, keeping each value in order.
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut collected: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        collected
            .entry(canonical_header_name(name.as_str()))
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    collected
}

/// `content-type` -> `Content-Type`
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
