//! Typed access to the launcher's preferences
//!
//! [`LauncherPreferences`] turns getter and setter calls into reads and
//! writes against a [`PreferenceStore`]. Getters never fail: an absent key,
//! a value of the wrong type, an unparsable number or a store read error all
//! yield the key's default. Setters propagate store errors.
//!
//! Settings without a setter here are written by the host's settings screen
//! directly through [`LauncherPreferences::store`] using the names in
//! [`crate::keys`].

use crate::binding::{decode_fields, GestureBinding, ShortcutBinding};
use crate::error::Result;
use crate::keys::{self, defaults};
use crate::reset::{ResetConfirmation, RESET_MESSAGE, RESET_TITLE};
use crate::theme::{Color, ColorSetting, ThemeAttribute, ThemeResolver};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use storage::PreferenceStore;

/// Preference facade for the launcher
#[derive(Clone)]
pub struct LauncherPreferences {
    store: Arc<dyn PreferenceStore>,
    theme: Arc<dyn ThemeResolver>,
}

impl LauncherPreferences {
    /// Create a facade over `store`, resolving `"material"` colors with `theme`
    pub fn new(store: Arc<dyn PreferenceStore>, theme: Arc<dyn ThemeResolver>) -> Self {
        Self { store, theme }
    }

    /// The underlying store
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    // =========================================================================
    // General UI
    // =========================================================================

    /// Background color; `"material"` resolves to the theme's on-primary color
    pub fn bg_color(&self) -> Color {
        self.color(keys::BG_COLOR, defaults::BG_COLOR, ThemeAttribute::ColorOnPrimary)
    }

    /// Text color; `"material"` resolves to the theme's primary color
    pub fn text_color(&self) -> Color {
        self.color(keys::TEXT_COLOR, defaults::TEXT_COLOR, ThemeAttribute::ColorPrimary)
    }

    /// Font family name
    pub fn text_font(&self) -> String {
        self.string(keys::TEXT_FONT, defaults::TEXT_FONT)
    }

    /// Font style name
    pub fn text_style(&self) -> String {
        self.string(keys::TEXT_STYLE, defaults::TEXT_STYLE)
    }

    /// Whether the system status bar is shown
    pub fn is_bar_visible(&self) -> bool {
        self.flag(keys::BAR_VISIBILITY, defaults::BAR_VISIBILITY)
    }

    /// Animation duration in milliseconds
    pub fn animation_speed(&self) -> i64 {
        self.number(keys::ANIMATION_SPEED, defaults::ANIMATION_SPEED)
    }

    /// Minimum swipe distance
    pub fn swipe_threshold(&self) -> i32 {
        self.number(keys::SWIPE_THRESHOLD, defaults::SWIPE_THRESHOLD)
    }

    /// Minimum swipe velocity
    pub fn swipe_velocity(&self) -> i32 {
        self.number(keys::SWIPE_VELOCITY, defaults::SWIPE_VELOCITY)
    }

    // =========================================================================
    // Home screen
    // =========================================================================

    /// Whether the clock is shown
    pub fn is_clock_enabled(&self) -> bool {
        self.flag(keys::CLOCK_ENABLED, defaults::CLOCK_ENABLED)
    }

    /// Clock alignment
    pub fn clock_alignment(&self) -> String {
        self.string(keys::CLOCK_ALIGNMENT, defaults::CLOCK_ALIGNMENT)
    }

    /// Clock size
    pub fn clock_size(&self) -> String {
        self.string(keys::CLOCK_SIZE, defaults::CLOCK_SIZE)
    }

    /// Whether the date is shown
    pub fn is_date_enabled(&self) -> bool {
        self.flag(keys::DATE_ENABLED, defaults::DATE_ENABLED)
    }

    /// Date size
    pub fn date_size(&self) -> String {
        self.string(keys::DATE_SIZE, defaults::DATE_SIZE)
    }

    /// Pin an app to the shortcut slot `element_id`
    pub fn set_shortcut(
        &self,
        element_id: i32,
        package_name: &str,
        profile: i32,
        label: &str,
    ) -> Result<()> {
        let encoded = ShortcutBinding::new(package_name, profile, label).encode()?;
        self.write_string(&keys::shortcut(element_id), &encoded)
    }

    /// Raw fields of the shortcut slot `element_id`
    ///
    /// An unassigned slot yields the two-field placeholder `["e", "e"]`.
    pub fn shortcut(&self, element_id: i32) -> Vec<String> {
        decode_fields(&self.string(&keys::shortcut(element_id), defaults::SHORTCUT))
    }

    /// Typed view of the shortcut slot `element_id`
    pub fn shortcut_binding(&self, element_id: i32) -> Option<ShortcutBinding> {
        let raw = self.string(&keys::shortcut(element_id), defaults::SHORTCUT);
        ShortcutBinding::decode(&raw)
    }

    /// Number of shortcut slots
    pub fn shortcut_count(&self) -> i32 {
        self.number(keys::SHORTCUT_NUMBER, defaults::SHORTCUT_NUMBER)
    }

    /// Horizontal shortcut alignment
    pub fn shortcut_alignment(&self) -> String {
        self.string(keys::SHORTCUT_ALIGNMENT, defaults::SHORTCUT_ALIGNMENT)
    }

    /// Vertical shortcut alignment
    pub fn shortcut_v_alignment(&self) -> String {
        self.string(keys::SHORTCUT_V_ALIGNMENT, defaults::SHORTCUT_V_ALIGNMENT)
    }

    /// Shortcut text size
    pub fn shortcut_size(&self) -> String {
        self.string(keys::SHORTCUT_SIZE, defaults::SHORTCUT_SIZE)
    }

    /// Layout weight of each shortcut row
    pub fn shortcut_weight(&self) -> f32 {
        self.number(keys::SHORTCUT_WEIGHT, defaults::SHORTCUT_WEIGHT)
    }

    /// Whether the battery indicator is shown
    pub fn is_battery_enabled(&self) -> bool {
        self.flag(keys::BATTERY_ENABLED, defaults::BATTERY_ENABLED)
    }

    // =========================================================================
    // Weather
    // =========================================================================

    /// Whether weather is shown
    pub fn is_weather_enabled(&self) -> bool {
        self.flag(keys::WEATHER_ENABLED, defaults::WEATHER_ENABLED)
    }

    /// Store the weather location
    ///
    /// The two keys are written independently. A `None` region removes it.
    pub fn set_weather_location(&self, location: &str, region: Option<&str>) -> Result<()> {
        self.write_string(keys::LOCATION, location)?;
        match region {
            Some(region) => self.write_string(keys::LOCATION_REGION, region),
            None => self.remove(keys::LOCATION_REGION),
        }
    }

    /// Weather location name
    pub fn weather_location(&self) -> String {
        self.string(keys::LOCATION, defaults::LOCATION)
    }

    /// Weather location region
    pub fn weather_region(&self) -> String {
        self.string(keys::LOCATION_REGION, defaults::LOCATION_REGION)
    }

    /// Temperature units
    pub fn temp_units(&self) -> String {
        self.string(keys::TEMP_UNITS, defaults::TEMP_UNITS)
    }

    /// Whether tapping the clock opens the clock app
    pub fn is_clock_gesture_enabled(&self) -> bool {
        self.flag(keys::CLOCK_CLICK, defaults::CLOCK_CLICK)
    }

    /// Whether tapping the date opens the calendar
    pub fn is_date_gesture_enabled(&self) -> bool {
        self.flag(keys::DATE_CLICK, defaults::DATE_CLICK)
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Bind an app to the swipe `direction`, or unbind it with `None`
    pub fn set_gesture(&self, direction: &str, binding: Option<&GestureBinding>) -> Result<()> {
        let key = keys::gesture_app(direction);
        match binding {
            Some(binding) => self.write_string(&key, &binding.encode()?),
            None => self.remove(&key),
        }
    }

    /// First field of the swipe binding, empty when unbound
    pub fn gesture_name(&self, direction: &str) -> String {
        self.gesture_info(direction).swap_remove(0)
    }

    /// Raw fields of the swipe binding; `[""]` when unbound
    pub fn gesture_info(&self, direction: &str) -> Vec<String> {
        decode_fields(&self.string(&keys::gesture_app(direction), defaults::GESTURE_APP))
    }

    /// Typed view of the swipe binding
    pub fn gesture_binding(&self, direction: &str) -> Option<GestureBinding> {
        let raw = self.string(&keys::gesture_app(direction), defaults::GESTURE_APP);
        GestureBinding::decode(&raw)
    }

    /// Whether the swipe `direction` launches its bound app
    pub fn is_gesture_enabled(&self, direction: &str) -> bool {
        self.flag(&keys::gesture_enabled(direction), defaults::GESTURE_ENABLED)
    }

    /// Whether double tap locks the screen
    pub fn is_double_tap_enabled(&self) -> bool {
        self.flag(keys::DOUBLE_TAP, defaults::DOUBLE_TAP)
    }

    // =========================================================================
    // App menu
    // =========================================================================

    /// App list alignment
    pub fn app_alignment(&self) -> String {
        self.string(keys::APP_MENU_ALIGNMENT, defaults::APP_MENU_ALIGNMENT)
    }

    /// App list text size
    pub fn app_size(&self) -> String {
        self.string(keys::APP_MENU_SIZE, defaults::APP_MENU_SIZE)
    }

    /// Whether the search bar is shown
    pub fn is_search_enabled(&self) -> bool {
        self.flag(keys::SEARCH_ENABLED, defaults::SEARCH_ENABLED)
    }

    /// Search bar alignment
    pub fn search_alignment(&self) -> String {
        self.string(keys::SEARCH_ALIGNMENT, defaults::SEARCH_ALIGNMENT)
    }

    /// Search bar text size
    pub fn search_size(&self) -> String {
        self.string(keys::SEARCH_SIZE, defaults::SEARCH_SIZE)
    }

    /// Spacing between app list entries
    pub fn app_spacing(&self) -> i32 {
        self.number(keys::APP_SPACING, defaults::APP_SPACING)
    }

    /// Whether the keyboard opens with the app menu
    pub fn is_auto_keyboard_enabled(&self) -> bool {
        self.flag(keys::AUTO_KEYBOARD, defaults::AUTO_KEYBOARD)
    }

    /// Whether a single search match is launched immediately
    pub fn is_auto_launch_enabled(&self) -> bool {
        self.flag(keys::AUTO_LAUNCH, defaults::AUTO_LAUNCH)
    }

    /// Whether contacts appear in search
    pub fn are_contacts_enabled(&self) -> bool {
        self.flag(keys::CONTACTS_ENABLED, defaults::CONTACTS_ENABLED)
    }

    /// Enable or disable contacts in search
    pub fn set_contacts_enabled(&self, enabled: bool) -> Result<()> {
        self.write_bool(keys::CONTACTS_ENABLED, enabled)
    }

    // =========================================================================
    // Hidden and renamed apps
    // =========================================================================

    /// Set the hidden flag for an app
    pub fn set_app_hidden(&self, package_name: &str, profile: i32, hidden: bool) -> Result<()> {
        self.write_bool(&keys::app_hidden(package_name, profile), hidden)
    }

    /// Whether an app is hidden
    pub fn is_app_hidden(&self, package_name: &str, profile: i32) -> bool {
        self.flag(&keys::app_hidden(package_name, profile), defaults::APP_HIDDEN)
    }

    /// Drop the hidden flag for an app
    pub fn set_app_visible(&self, package_name: &str, profile: i32) -> Result<()> {
        self.remove(&keys::app_hidden(package_name, profile))
    }

    /// Give an app a custom display name
    pub fn set_app_name(&self, package_name: &str, profile: i32, new_name: &str) -> Result<()> {
        self.write_string(&keys::app_name(package_name, profile), new_name)
    }

    /// Display name of an app, or `fallback` when it was never renamed
    pub fn app_name(&self, package_name: &str, profile: i32, fallback: &str) -> String {
        self.string(&keys::app_name(package_name, profile), fallback)
    }

    /// Drop the custom display name for an app
    pub fn reset_app_name(&self, package_name: &str, profile: i32) -> Result<()> {
        self.remove(&keys::app_name(package_name, profile))
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Ask `confirmation` and wipe everything if the user agrees
    ///
    /// Returns whether the reset happened.
    pub fn reset_all(&self, confirmation: &dyn ResetConfirmation) -> Result<bool> {
        if !confirmation.confirm(RESET_TITLE, RESET_MESSAGE) {
            tracing::debug!("preference reset cancelled");
            return Ok(false);
        }
        self.clear_all()?;
        Ok(true)
    }

    /// Remove every preference and set the restore marker
    pub fn clear_all(&self) -> Result<()> {
        self.store.clear()?;
        self.store.set_bool(keys::IS_RESTORED, true)?;
        tracing::info!("all preferences cleared");
        Ok(())
    }

    /// Whether preferences were wiped since the marker was last cleared
    pub fn is_restored(&self) -> bool {
        self.flag(keys::IS_RESTORED, false)
    }

    /// Acknowledge the restore marker
    pub fn clear_restored_marker(&self) -> Result<()> {
        self.remove(keys::IS_RESTORED)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn string(&self, key: &str, default: &str) -> String {
        match self.store.get_string(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!(key, "falling back to default: {}", e);
                default.to_string()
            }
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.store.get_bool(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, "falling back to default: {}", e);
                default
            }
        }
    }

    fn number<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let raw = match self.store.get_string(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(key, "falling back to default: {}", e);
                return default;
            }
        };
        raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %raw, "not a number ({}), using {}", e, default);
            default
        })
    }

    fn color(&self, key: &str, default: &str, attr: ThemeAttribute) -> Color {
        match ColorSetting::parse(&self.string(key, default)) {
            ColorSetting::Material => self.theme.resolve(attr),
            ColorSetting::Literal(literal) => Color::parse(&literal).unwrap_or_else(|| {
                tracing::warn!(key, value = %literal, "not a color, using {}", default);
                Color::parse(default).unwrap_or(Color::TRANSPARENT)
            }),
        }
    }

    fn write_string(&self, key: &str, value: &str) -> Result<()> {
        self.store.set_string(key, value)?;
        tracing::debug!(key, "preference written");
        Ok(())
    }

    fn write_bool(&self, key: &str, value: bool) -> Result<()> {
        self.store.set_bool(key, value)?;
        tracing::debug!(key, "preference written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key)?;
        tracing::debug!(key, "preference removed");
        Ok(())
    }
}
