//! # podpanel-core - Core Domain Types
//!
//! Foundation crate for podpanel. Provides the records exchanged with the
//! automation backend, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Settings (`settings`)
//! - [`Settings`] - The single settings record shared with the backend
//! - [`SelectedVariant`] - A chosen catalog variant with its price
//! - [`MAX_SELECTED_VARIANTS`], [`DEFAULT_VARIANT_PRICE`]
//!
//! ### Catalog (`catalog`)
//! - [`CatalogVariant`], [`MockupDescriptor`] - Transient catalog records
//!
//! ### Analysis (`analysis`)
//! - [`AnalysisResult`] - The `{analysis, listing}` pair and its text summary
//!
//! ### Status (`status`)
//! - [`MonitorStatus`], [`DashboardStats`], [`RunRecord`], [`HealthStatus`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use podpanel_core::prelude::*;
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod serde_helpers;
pub mod settings;
pub mod status;

// Re-export commonly used types at crate root for convenience
pub use analysis::AnalysisResult;
pub use catalog::{CatalogVariant, MockupDescriptor, VariantOptions};
pub use error::{Error, Result, ResultExt};
pub use settings::{SelectedVariant, Settings, DEFAULT_VARIANT_PRICE, MAX_SELECTED_VARIANTS};
pub use status::{DashboardStats, HealthStatus, MonitorStatus, RunRecord};
