//! Confirmation step for wiping every preference
//!
//! The presentation layer owns the prompt; the settings layer only asks.

/// Title shown on the reset prompt
pub const RESET_TITLE: &str = "Confirmation";

/// Body shown on the reset prompt
pub const RESET_MESSAGE: &str = "You will lose ALL changes that you have made to the launcher \
     settings, shortcuts, hidden apps, etc.\n\nAre you sure?";

/// Caller-owned confirm/cancel prompt
#[cfg_attr(test, mockall::automock)]
pub trait ResetConfirmation {
    /// Ask the user; `true` means confirm
    fn confirm(&self, title: &str, message: &str) -> bool;
}

impl<F> ResetConfirmation for F
where
    F: Fn(&str, &str) -> bool,
{
    fn confirm(&self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}
