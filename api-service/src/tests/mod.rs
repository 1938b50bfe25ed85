mod user_tests;
mod utils;
