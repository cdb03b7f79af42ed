pub mod call_result;
pub mod relay_service;
pub mod relay_service_error;
pub mod reqwest_relay_service;
pub mod shared_transport;
