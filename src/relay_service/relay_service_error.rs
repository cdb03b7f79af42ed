#[derive(Debug, thiserror::Error)]
pub enum RelayServiceError {
    #[error("Error on proxied request: {0}")]
    RequestConstructionFailed(String),

    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Error parsing body: {0}")]
    ResponseBodyUnreadable(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait RelayServiceErrorChecker {
    fn is_builder(&self) -> bool;
    fn error_string(&self) -> String;
}

impl RelayServiceError {
    /// Classifies a failure raised while sending a request.
    ///
    /// Builder failures surface lazily in reqwest, at send time, so they are
    /// told apart here from failures to reach the backend.
    pub fn from_send<T: RelayServiceErrorChecker>(err: &T) -> Self {
        if err.is_builder() {
            RelayServiceError::RequestConstructionFailed(err.error_string())
        } else {
            RelayServiceError::BackendUnreachable(err.error_string())
        }
    }
}

impl RelayServiceErrorChecker for reqwest::Error {
    fn is_builder(&self) -> bool {
        self.is_builder()
    }

    fn error_string(&self) -> String {
        use std::error::Error;

        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
