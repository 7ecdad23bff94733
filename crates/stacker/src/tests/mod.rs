//! Crate-level scenario tests
//!
//! Unit tests live next to the code they test; these drive whole operations
//! through an in-memory host.

mod properties;
