//! # segbuild-core - Core Domain Types
//!
//! Foundation crate for Segment Builder. Provides the schema catalog, the
//! submission payload, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`SchemaField`] - A selectable field with key, label and category
//! - [`TraitCategory`] - `user` or `group`
//! - [`SCHEMA_CATALOG`] - The fixed, ordered catalog
//!
//! ### Payload (`payload`)
//! - [`SubmissionPayload`] - The JSON document posted to the endpoint
//! - [`SchemaEntry`] - One single-key `{ key: label }` object
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` and invariant-violation classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use segbuild_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod payload;

/// Prelude for common imports used throughout all Segment Builder crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::{find_field, SchemaField, TraitCategory, SCHEMA_CATALOG};
pub use error::{Error, Result, ResultExt};
pub use payload::{SchemaEntry, SubmissionPayload};
