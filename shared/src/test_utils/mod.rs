pub mod http_test_utils;
pub mod memory_store;
pub mod test_logging;
