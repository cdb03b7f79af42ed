#[derive(Debug, thiserror::Error)]
pub enum CallDescriptorError {
    #[error("Invalid query input: missing target url.")]
    MissingTarget,

    #[error("Invalid query input: {input:?} is not a valid url: {source}")]
    MalformedTarget {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid query input: {0:?} must have both a scheme and a host.")]
    IncompleteTarget(String),
}
