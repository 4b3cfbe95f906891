//! Integration test modules.

mod fetch_features;
