//! Client configuration for podpanel
//!
//! Supports:
//! - `<config_dir>/podpanel/config.toml` - Backend address and polling cadence
//! - `--config <PATH>` - An explicit file in the same format

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_config};
pub use types::*;
