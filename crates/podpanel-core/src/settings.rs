//! The settings record shared with the backend
//!
//! One instance exists per process. It is loaded from `GET /settings`,
//! mutated in place by form edits and selection changes, and written back
//! whole with `POST /settings`.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Hard upper bound on `selected_variants` imposed by the catalog service.
pub const MAX_SELECTED_VARIANTS: usize = 100;

/// Price (minor currency units) used when no catalog price is on hand.
pub const DEFAULT_VARIANT_PRICE: i64 = 1999;

/// A chosen product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedVariant {
    pub variant_id: i64,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Minor currency units
    #[serde(default = "default_price")]
    pub price: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

impl SelectedVariant {
    /// Entry created by toggling a variant on without a catalog price.
    pub fn toggled_on(variant_id: i64) -> Self {
        Self {
            variant_id,
            enabled: true,
            price: DEFAULT_VARIANT_PRICE,
            cost: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_price() -> i64 {
    DEFAULT_VARIANT_PRICE
}

/// Client-side view of the backend settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub watch_folder: String,
    pub printify_api_key: String,
    pub printify_shop_id: String,

    pub blueprint_id: i64,
    pub print_provider_id: i64,

    pub base_price: Option<f64>,
    pub profit_percent: Option<f64>,

    pub copy_previous: bool,

    /// Ordered, unique by `variant_id`, at most [`MAX_SELECTED_VARIANTS`].
    #[serde(deserialize_with = "null_as_default")]
    pub selected_variants: Vec<SelectedVariant>,

    /// Set semantics; kept unique, order irrelevant.
    #[serde(deserialize_with = "null_as_default")]
    pub selected_mockups: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            watch_folder: String::new(),
            printify_api_key: String::new(),
            printify_shop_id: String::new(),
            blueprint_id: 0,
            print_provider_id: 0,
            base_price: None,
            profit_percent: None,
            copy_previous: true,
            selected_variants: Vec::new(),
            selected_mockups: Vec::new(),
        }
    }
}

impl Settings {
    pub fn is_variant_selected(&self, variant_id: i64) -> bool {
        self.selected_variants
            .iter()
            .any(|v| v.variant_id == variant_id)
    }

    pub fn is_mockup_selected(&self, mockup_id: &str) -> bool {
        self.selected_mockups.iter().any(|m| m == mockup_id)
    }

    /// Whether the variant selection sits at the catalog limit
    pub fn variant_limit_reached(&self) -> bool {
        self.selected_variants.len() >= MAX_SELECTED_VARIANTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_decodes_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.copy_previous);
    }

    #[test]
    fn test_null_selections_normalize_to_empty() {
        let json = r#"{
            "watch_folder": "C:/art",
            "blueprint_id": 6,
            "print_provider_id": 99,
            "selected_variants": null,
            "selected_mockups": null
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.watch_folder, "C:/art");
        assert_eq!(settings.blueprint_id, 6);
        assert!(settings.selected_variants.is_empty());
        assert!(settings.selected_mockups.is_empty());
    }

    #[test]
    fn test_backend_defaults_decode() {
        let json = r#"{
            "watch_folder": "",
            "printify_api_key": "",
            "printify_shop_id": "",
            "blueprint_id": 0,
            "print_provider_id": 0,
            "base_price": null,
            "profit_percent": 30.0,
            "selected_variants": [],
            "selected_mockups": [],
            "copy_previous": true
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.profit_percent, Some(30.0));
        assert_eq!(settings.base_price, None);
    }

    #[test]
    fn test_variant_without_cost_omits_field() {
        let value = serde_json::to_value(SelectedVariant::toggled_on(5)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"variant_id": 5, "enabled": true, "price": 1999})
        );
    }

    #[test]
    fn test_variant_defaults_when_backend_omits_fields() {
        let v: SelectedVariant = serde_json::from_str(r#"{"variant_id": 12}"#).unwrap();
        assert_eq!(v, SelectedVariant::toggled_on(12));
    }

    #[test]
    fn test_limit_reached_at_exactly_max() {
        let mut settings = Settings::default();
        settings.selected_variants = (0..MAX_SELECTED_VARIANTS as i64)
            .map(SelectedVariant::toggled_on)
            .collect();
        assert!(settings.variant_limit_reached());
        settings.selected_variants.pop();
        assert!(!settings.variant_limit_reached());
    }
}
