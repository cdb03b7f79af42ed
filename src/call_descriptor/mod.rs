pub mod call_descriptor;
pub mod call_descriptor_error;
pub mod call_metadata;

#[cfg(test)]
pub(crate) mod captured_logs;
