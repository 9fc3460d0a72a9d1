//! Integration tests for diskspace.


mod arg_tests;
mod invalid_config_tests;
mod query_tests;
mod valid_config_tests;
