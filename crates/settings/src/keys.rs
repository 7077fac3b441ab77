//! Persisted key names and their default values
//!
//! Key names are part of the on-disk format and must not change.

#![allow(missing_docs)]

// General UI
pub const BG_COLOR: &str = "bgColor";
pub const TEXT_COLOR: &str = "textColor";
pub const TEXT_FONT: &str = "textFont";
pub const TEXT_STYLE: &str = "textStyle";
pub const BAR_VISIBILITY: &str = "barVisibility";
pub const ANIMATION_SPEED: &str = "animationSpeed";
pub const SWIPE_THRESHOLD: &str = "swipeThreshold";
pub const SWIPE_VELOCITY: &str = "swipeVelocity";

// Home screen
pub const CLOCK_ENABLED: &str = "clockEnabled";
pub const CLOCK_ALIGNMENT: &str = "clockAlignment";
pub const CLOCK_SIZE: &str = "clockSize";
pub const DATE_ENABLED: &str = "dateEnabled";
pub const DATE_SIZE: &str = "dateSize";
pub const SHORTCUT_NUMBER: &str = "shortcutNo";
pub const SHORTCUT_ALIGNMENT: &str = "shortcutAlignment";
pub const SHORTCUT_V_ALIGNMENT: &str = "shortcutVAlignment";
pub const SHORTCUT_SIZE: &str = "shortcutSize";
pub const SHORTCUT_WEIGHT: &str = "shortcutWeight";
pub const BATTERY_ENABLED: &str = "batteryEnabled";

// Weather
pub const WEATHER_ENABLED: &str = "weatherEnabled";
pub const LOCATION: &str = "location";
pub const LOCATION_REGION: &str = "locationRegion";
pub const TEMP_UNITS: &str = "tempUnits";
pub const CLOCK_CLICK: &str = "clockClick";
pub const DATE_CLICK: &str = "dateClick";

// Gestures
pub const DOUBLE_TAP: &str = "doubleTap";

// App menu
pub const APP_MENU_ALIGNMENT: &str = "appMenuAlignment";
pub const APP_MENU_SIZE: &str = "appMenuSize";
pub const SEARCH_ENABLED: &str = "searchEnabled";
pub const SEARCH_ALIGNMENT: &str = "searchAlignment";
pub const SEARCH_SIZE: &str = "searchSize";
pub const APP_SPACING: &str = "appSpacing";
pub const AUTO_KEYBOARD: &str = "autoKeyboard";
pub const AUTO_LAUNCH: &str = "autoLaunch";
pub const CONTACTS_ENABLED: &str = "contactsEnabled";

/// Written after every preference has been wiped
pub const IS_RESTORED: &str = "isRestored";

/// `shortcut<elementId>`
pub fn shortcut(element_id: i32) -> String {
    format!("shortcut{}", element_id)
}

/// `<direction>SwipeApp`
pub fn gesture_app(direction: &str) -> String {
    format!("{}SwipeApp", direction)
}

/// `<direction>Swipe`
pub fn gesture_enabled(direction: &str) -> String {
    format!("{}Swipe", direction)
}

/// `hidden<packageName>-<profile>`
pub fn app_hidden(package_name: &str, profile: i32) -> String {
    format!("hidden{}-{}", package_name, profile)
}

/// `name<packageName>-<profile>`
pub fn app_name(package_name: &str, profile: i32) -> String {
    format!("name{}-{}", package_name, profile)
}

/// Default values for keys that have one
pub mod defaults {
    pub const BG_COLOR: &str = "#00000000";
    pub const TEXT_COLOR: &str = "#FFF3F3F3";
    pub const TEXT_FONT: &str = "system";
    pub const TEXT_STYLE: &str = "normal";
    pub const BAR_VISIBILITY: bool = false;
    pub const ANIMATION_SPEED: i64 = 200;
    pub const SWIPE_THRESHOLD: i32 = 100;
    pub const SWIPE_VELOCITY: i32 = 100;

    pub const CLOCK_ENABLED: bool = true;
    pub const CLOCK_ALIGNMENT: &str = "left";
    pub const CLOCK_SIZE: &str = "medium";
    pub const DATE_ENABLED: bool = true;
    pub const DATE_SIZE: &str = "medium";
    /// Placeholder for an unassigned shortcut slot
    pub const SHORTCUT: &str = "e§splitter§e";
    pub const SHORTCUT_NUMBER: i32 = 4;
    pub const SHORTCUT_ALIGNMENT: &str = "left";
    pub const SHORTCUT_V_ALIGNMENT: &str = "center";
    pub const SHORTCUT_SIZE: &str = "medium";
    pub const SHORTCUT_WEIGHT: f32 = 0.09;
    pub const BATTERY_ENABLED: bool = false;

    pub const WEATHER_ENABLED: bool = false;
    pub const LOCATION: &str = "";
    pub const LOCATION_REGION: &str = "";
    pub const TEMP_UNITS: &str = "celsius";
    pub const CLOCK_CLICK: bool = true;
    pub const DATE_CLICK: bool = true;

    pub const GESTURE_APP: &str = "";
    pub const GESTURE_ENABLED: bool = false;
    pub const DOUBLE_TAP: bool = false;

    pub const APP_MENU_ALIGNMENT: &str = "left";
    pub const APP_MENU_SIZE: &str = "medium";
    pub const SEARCH_ENABLED: bool = true;
    pub const SEARCH_ALIGNMENT: &str = "left";
    pub const SEARCH_SIZE: &str = "medium";
    pub const APP_SPACING: i32 = 20;
    pub const AUTO_KEYBOARD: bool = false;
    pub const AUTO_LAUNCH: bool = false;
    pub const CONTACTS_ENABLED: bool = false;

    pub const APP_HIDDEN: bool = false;
}
