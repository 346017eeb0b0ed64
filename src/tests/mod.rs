//! Internal test modules - whitebox tests with crate access
//!
//! Property tests for the query laws and acceptance scenarios that run the
//! screens against the built-in dataset.

mod query_properties;
