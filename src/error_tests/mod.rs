//! Error path testing
//!
//! Tests how operations and the command loop behave when the filesystem
//! refuses them. Conversions between error types are covered in src/errors.rs.

mod io_tests;
