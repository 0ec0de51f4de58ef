//! Knobs read from the environment by test suites running in CI.

pub mod property_test_profile;
