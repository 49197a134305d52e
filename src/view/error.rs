//! View-specific error types
//!
//! The view engine itself never fails: page requests are clamped. The only
//! error is a page size coming from outside (config file, command line) that
//! is not one of the offered options.

use thiserror::Error;

/// View configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Page size not in 3/6/9/12
    #[error("Invalid page size {0}: expected one of 3, 6, 9, 12")]
    InvalidPageSize(usize),

    /// Surface name not recognized
    #[error("Unknown surface '{0}': expected 'map' or 'list'")]
    UnknownSurface(String),
}
