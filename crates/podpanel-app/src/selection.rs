//! Variant and mockup selection
//!
//! Variants form a bounded toggle-set capped at [`MAX_SELECTED_VARIANTS`];
//! mockups an unbounded one. Both operate directly on the settings record.
//! Callers save after every mutation.

use podpanel_core::{
    CatalogVariant, SelectedVariant, Settings, DEFAULT_VARIANT_PRICE, MAX_SELECTED_VARIANTS,
};

/// Shown when a toggle pushes the selection over the cap
pub const VARIANT_LIMIT_NOTICE: &str = "Printify limit is 100 variants.";

/// Outcome of [`toggle_variant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantToggle {
    Added,
    Removed,
    /// Appended, then dropped again by truncation to the cap
    LimitExceeded,
}

/// Remove `variant_id` if selected, otherwise append it with the default
/// price. A selection that grows past the cap is cut back to its first
/// [`MAX_SELECTED_VARIANTS`] entries.
pub fn toggle_variant(settings: &mut Settings, variant_id: i64) -> VariantToggle {
    let selected = &mut settings.selected_variants;

    if let Some(pos) = selected.iter().position(|v| v.variant_id == variant_id) {
        selected.remove(pos);
        return VariantToggle::Removed;
    }

    selected.push(SelectedVariant::toggled_on(variant_id));
    if selected.len() > MAX_SELECTED_VARIANTS {
        selected.truncate(MAX_SELECTED_VARIANTS);
        return VariantToggle::LimitExceeded;
    }
    VariantToggle::Added
}

/// Replace the selection with the first [`MAX_SELECTED_VARIANTS`] catalog
/// entries, in catalog order, carrying catalog price and cost.
pub fn select_all_variants(settings: &mut Settings, catalog: &[CatalogVariant]) {
    let mut seen = std::collections::HashSet::new();
    settings.selected_variants = catalog
        .iter()
        .filter(|v| seen.insert(v.id))
        .take(MAX_SELECTED_VARIANTS)
        .map(|v| SelectedVariant {
            variant_id: v.id,
            enabled: true,
            price: v.price.unwrap_or(DEFAULT_VARIANT_PRICE),
            cost: v.cost,
        })
        .collect();
}

pub fn clear_variants(settings: &mut Settings) {
    settings.selected_variants.clear();
}

/// Add or remove `mockup_id`; returns whether it is now selected
pub fn toggle_mockup(settings: &mut Settings, mockup_id: &str) -> bool {
    let selected = &mut settings.selected_mockups;
    if let Some(pos) = selected.iter().position(|m| m == mockup_id) {
        selected.remove(pos);
        false
    } else {
        selected.push(mockup_id.to_string());
        true
    }
}

/// `Variants selected: N/100`, with a marker once the cap is reached
pub fn counter_text(settings: &Settings) -> String {
    let count = settings.selected_variants.len();
    if count >= MAX_SELECTED_VARIANTS {
        format!("Variants selected: {count}/{MAX_SELECTED_VARIANTS} (MAX LIMIT REACHED)")
    } else {
        format!("Variants selected: {count}/{MAX_SELECTED_VARIANTS}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(ids: impl IntoIterator<Item = i64>) -> Vec<CatalogVariant> {
        ids.into_iter()
            .map(|id| CatalogVariant {
                id,
                title: Some(format!("V{id}")),
                options: Default::default(),
                price: None,
                cost: None,
            })
            .collect()
    }

    fn ids(settings: &Settings) -> Vec<i64> {
        settings.selected_variants.iter().map(|v| v.variant_id).collect()
    }

    #[test]
    fn test_toggle_on_empty() {
        let mut settings = Settings::default();
        assert_eq!(toggle_variant(&mut settings, 5), VariantToggle::Added);
        assert_eq!(
            settings.selected_variants,
            vec![SelectedVariant {
                variant_id: 5,
                enabled: true,
                price: 1999,
                cost: None
            }]
        );
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog(1..=10));
        let before = settings.selected_variants.clone();

        toggle_variant(&mut settings, 42);
        toggle_variant(&mut settings, 42);
        assert_eq!(settings.selected_variants, before);
    }

    #[test]
    fn test_toggle_removes_existing_in_place() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog(1..=4));
        assert_eq!(toggle_variant(&mut settings, 2), VariantToggle::Removed);
        assert_eq!(ids(&settings), vec![1, 3, 4]);
    }

    #[test]
    fn test_toggle_past_cap_keeps_first_hundred() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog(1..=100));

        assert_eq!(toggle_variant(&mut settings, 500), VariantToggle::LimitExceeded);
        assert_eq!(settings.selected_variants.len(), MAX_SELECTED_VARIANTS);
        assert!(!settings.is_variant_selected(500));
        assert_eq!(ids(&settings), (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn test_toggle_at_cap_can_still_remove() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog(1..=100));
        assert_eq!(toggle_variant(&mut settings, 50), VariantToggle::Removed);
        assert_eq!(settings.selected_variants.len(), 99);
    }

    #[test]
    fn test_select_all_caps_at_hundred_in_order() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog(1..=150));
        assert_eq!(ids(&settings), (1..=100).collect::<Vec<_>>());
        assert!(settings.selected_variants.iter().all(|v| v.enabled));
    }

    #[test]
    fn test_select_all_small_catalog() {
        let mut settings = Settings::default();
        toggle_variant(&mut settings, 999);
        select_all_variants(&mut settings, &catalog([7, 3, 9]));
        assert_eq!(ids(&settings), vec![7, 3, 9]);
    }

    #[test]
    fn test_select_all_skips_duplicate_ids() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog([1, 2, 1, 3]));
        assert_eq!(ids(&settings), vec![1, 2, 3]);
    }

    #[test]
    fn test_select_all_carries_catalog_price_and_cost() {
        let mut settings = Settings::default();
        let mut variants = catalog([1, 2]);
        variants[0].price = Some(2450);
        variants[0].cost = Some(1210);
        select_all_variants(&mut settings, &variants);

        assert_eq!(settings.selected_variants[0].price, 2450);
        assert_eq!(settings.selected_variants[0].cost, Some(1210));
        assert_eq!(settings.selected_variants[1].price, DEFAULT_VARIANT_PRICE);
        assert_eq!(settings.selected_variants[1].cost, None);
    }

    #[test]
    fn test_select_all_zero_price_is_kept() {
        let mut settings = Settings::default();
        let mut variants = catalog([1]);
        variants[0].price = Some(0);
        select_all_variants(&mut settings, &variants);
        assert_eq!(settings.selected_variants[0].price, 0);
    }

    #[test]
    fn test_length_never_exceeds_cap() {
        let mut settings = Settings::default();
        for id in 0..250 {
            toggle_variant(&mut settings, id);
            assert!(settings.selected_variants.len() <= MAX_SELECTED_VARIANTS);
        }
        select_all_variants(&mut settings, &catalog(0..300));
        assert!(settings.selected_variants.len() <= MAX_SELECTED_VARIANTS);
    }

    #[test]
    fn test_clear() {
        let mut settings = Settings::default();
        select_all_variants(&mut settings, &catalog(1..=5));
        clear_variants(&mut settings);
        assert!(settings.selected_variants.is_empty());
    }

    #[test]
    fn test_toggle_mockup_symmetric() {
        let mut settings = Settings::default();
        assert!(toggle_mockup(&mut settings, "front"));
        assert!(toggle_mockup(&mut settings, "back"));
        assert!(!toggle_mockup(&mut settings, "front"));
        assert_eq!(settings.selected_mockups, vec!["back".to_string()]);
    }

    #[test]
    fn test_counter_text() {
        let mut settings = Settings::default();
        assert_eq!(counter_text(&settings), "Variants selected: 0/100");
        select_all_variants(&mut settings, &catalog(1..=100));
        assert_eq!(
            counter_text(&settings),
            "Variants selected: 100/100 (MAX LIMIT REACHED)"
        );
    }
}
