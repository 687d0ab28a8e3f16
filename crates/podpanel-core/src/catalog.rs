//! Catalog records fetched per blueprint/provider pair
//!
//! Read-only and transient: the client holds them in a volatile list that is
//! replaced wholesale on each fetch and never persisted.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::minor_units;

/// Option values attached to a catalog variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOptions {
    pub color: Option<String>,
    pub size: Option<String>,
}

/// A variant offered by the print provider for a blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariant {
    pub id: i64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub options: VariantOptions,

    /// Minor currency units
    #[serde(default, deserialize_with = "minor_units")]
    pub price: Option<i64>,

    /// Minor currency units
    #[serde(default, deserialize_with = "minor_units")]
    pub cost: Option<i64>,
}

impl CatalogVariant {
    /// Chip label: title, falling back to the id.
    pub fn label(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.id.to_string(),
        }
    }

    /// Color name used for the swatch: option color, then title.
    pub fn color_name(&self) -> &str {
        self.options
            .color
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.title.as_deref())
            .unwrap_or("color")
    }
}

/// A mockup placement offered for a blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockupDescriptor {
    pub mockup_id: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl MockupDescriptor {
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.mockup_id,
        }
    }
}
