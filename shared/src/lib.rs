pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

// Test utilities - publicly exposed with the test_utils feature
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
