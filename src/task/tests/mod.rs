//! Unit tests for task domain and service behaviour.

mod service_tests;
