//! Launcher settings
//!
//! Umbrella crate re-exporting the preference store and the typed settings
//! facade built on it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use settings;
pub use storage;

pub use settings::{LauncherPreferences, ResetConfirmation, StaticTheme, ThemeResolver};
pub use storage::{KvConfig, KvStore, MemoryStore, PreferenceStore};
