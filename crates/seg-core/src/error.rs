//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `SegError`
//! via `From` impls or wrap it as one variant.  Once a model is built there
//! is nothing left to fail in the core: the only enforced failure condition
//! is invalid configuration, caught at construction.

use thiserror::Error;

/// The top-level error type for `seg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SegError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `seg-*` crates.
pub type SegResult<T> = Result<T, SegError>;
