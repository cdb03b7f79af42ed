use async_trait::async_trait;

use crate::call_descriptor::call_descriptor::CallDescriptor;
use crate::relay_service::call_result::CallResult;
use crate::relay_service::relay_service_error::RelayServiceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayService: Send + Sync {
    async fn execute(&self, descriptor: CallDescriptor) -> Result<CallResult, RelayServiceError>;
}
