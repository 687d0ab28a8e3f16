//! Settings record and its editable form
//!
//! [`SettingsState`] holds the authoritative in-memory [`Settings`] together
//! with the text the user is editing. Form values only reach the record
//! through [`SettingsState::mutate_from_form`], which runs before every save.

use podpanel_core::prelude::*;
use podpanel_core::Settings;

/// Editable fields of the settings form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    WatchFolder,
    ApiKey,
    ShopId,
    BlueprintId,
    PrintProviderId,
    BasePrice,
    ProfitPercent,
    CopyPrevious,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::WatchFolder,
        FormField::ApiKey,
        FormField::ShopId,
        FormField::BlueprintId,
        FormField::PrintProviderId,
        FormField::BasePrice,
        FormField::ProfitPercent,
        FormField::CopyPrevious,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::WatchFolder => "Watch folder",
            FormField::ApiKey => "Printify API key",
            FormField::ShopId => "Printify shop ID",
            FormField::BlueprintId => "Blueprint ID",
            FormField::PrintProviderId => "Print provider ID",
            FormField::BasePrice => "Base price",
            FormField::ProfitPercent => "Profit %",
            FormField::CopyPrevious => "Copy previous product",
        }
    }

    /// Checkbox fields flip in place instead of entering text edit mode
    pub fn is_toggle(&self) -> bool {
        matches!(self, FormField::CopyPrevious)
    }

    /// Rendered masked in the form
    pub fn is_secret(&self) -> bool {
        matches!(self, FormField::ApiKey)
    }
}

/// Raw form contents as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsForm {
    pub watch_folder: String,
    pub printify_api_key: String,
    pub printify_shop_id: String,
    pub blueprint_id: String,
    pub print_provider_id: String,
    pub base_price: String,
    pub profit_percent: String,
    pub copy_previous: bool,
}

impl SettingsForm {
    /// Populate every field from `settings`
    pub fn hydrate(settings: &Settings) -> Self {
        Self {
            watch_folder: settings.watch_folder.clone(),
            printify_api_key: settings.printify_api_key.clone(),
            printify_shop_id: settings.printify_shop_id.clone(),
            blueprint_id: settings.blueprint_id.to_string(),
            print_provider_id: settings.print_provider_id.to_string(),
            base_price: settings.base_price.map(|p| p.to_string()).unwrap_or_default(),
            profit_percent: settings
                .profit_percent
                .map(|p| p.to_string())
                .unwrap_or_default(),
            copy_previous: settings.copy_previous,
        }
    }

    /// Text buffer behind a field; `None` for checkboxes
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::WatchFolder => Some(&self.watch_folder),
            FormField::ApiKey => Some(&self.printify_api_key),
            FormField::ShopId => Some(&self.printify_shop_id),
            FormField::BlueprintId => Some(&self.blueprint_id),
            FormField::PrintProviderId => Some(&self.print_provider_id),
            FormField::BasePrice => Some(&self.base_price),
            FormField::ProfitPercent => Some(&self.profit_percent),
            FormField::CopyPrevious => None,
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::WatchFolder => Some(&mut self.watch_folder),
            FormField::ApiKey => Some(&mut self.printify_api_key),
            FormField::ShopId => Some(&mut self.printify_shop_id),
            FormField::BlueprintId => Some(&mut self.blueprint_id),
            FormField::PrintProviderId => Some(&mut self.print_provider_id),
            FormField::BasePrice => Some(&mut self.base_price),
            FormField::ProfitPercent => Some(&mut self.profit_percent),
            FormField::CopyPrevious => None,
        }
    }
}

/// The settings record plus the form that edits it
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub record: Settings,
    pub form: SettingsForm,
    /// Set once the first `GET /settings` has succeeded
    pub loaded: bool,
}

impl SettingsState {
    /// Replace the record with one fetched from the backend and refill the
    /// form from it. Null selections have already been normalized to empty
    /// by deserialization.
    pub fn hydrate(&mut self, settings: Settings) {
        self.form = SettingsForm::hydrate(&settings);
        self.record = settings;
        self.loaded = true;
    }

    /// Copy form values into the record.
    ///
    /// Strings are trimmed. Required integers become 0 when empty or not a
    /// number; optional decimals become `None`. Selections are untouched.
    pub fn mutate_from_form(&mut self) {
        let form = &self.form;
        let record = &mut self.record;

        record.watch_folder = form.watch_folder.trim().to_string();
        record.printify_api_key = form.printify_api_key.trim().to_string();
        record.printify_shop_id = form.printify_shop_id.trim().to_string();
        record.blueprint_id = coerce_int("blueprint_id", &form.blueprint_id);
        record.print_provider_id = coerce_int("print_provider_id", &form.print_provider_id);
        record.base_price = coerce_decimal("base_price", &form.base_price);
        record.profit_percent = coerce_decimal("profit_percent", &form.profit_percent);
        record.copy_previous = form.copy_previous;
    }

    /// Apply the form and return the full record to send with `POST /settings`
    pub fn snapshot_for_save(&mut self) -> Settings {
        self.mutate_from_form();
        self.record.clone()
    }
}

fn coerce_int(name: &str, raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    // "12.0" is still a whole number
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => value as i64,
        _ => {
            warn!("{} is not a whole number ({:?}), using 0", name, raw);
            0
        }
    }
}

fn coerce_decimal(name: &str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("{} is not a number ({:?}), leaving it unset", name, raw);
            None
        }
    }
}
