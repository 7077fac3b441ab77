//! Launcher settings
//!
//! This crate provides typed access to the launcher's preferences on top of
//! a [`storage::PreferenceStore`]: defaults for every key, composite
//! shortcut and gesture bindings, theme-resolved colors and the reset flow.
//!
//! # Example
//!
//! ```rust
//! use settings::{LauncherPreferences, StaticTheme};
//! use std::sync::Arc;
//! use storage::MemoryStore;
//!
//! let prefs = LauncherPreferences::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(StaticTheme::dark()),
//! );
//!
//! assert_eq!(prefs.clock_alignment(), "left");
//! prefs.set_shortcut(0, "org.example.mail", 0, "Mail").unwrap();
//! assert_eq!(prefs.shortcut(0), vec!["org.example.mail", "0", "Mail"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod error;
pub mod keys;
pub mod prefs;
pub mod reset;
pub mod theme;

pub use binding::{GestureBinding, ShortcutBinding, SEPARATOR};
pub use error::{Result, SettingsError};
pub use prefs::LauncherPreferences;
pub use reset::ResetConfirmation;
pub use theme::{Color, ColorSetting, StaticTheme, ThemeAttribute, ThemeResolver};
