//! UI state: theme, colours and toast messages

use std::time::{Duration, Instant};

use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug)]
pub struct UiState {
    pub toast: Option<Toast>,
    pub theme: Theme,
    pub colors: ThemeColors,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// Drop the toast once it expired
    pub fn update_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let mut ui = UiState::default();
        ui.show_toast("Saved");
        let now = Instant::now();
        ui.update_toast(now);
        assert!(ui.toast.is_some());

        ui.update_toast(now + TOAST_DURATION + Duration::from_millis(1));
        assert!(ui.toast.is_none());
    }

    #[test]
    fn test_cycle_theme() {
        let mut ui = UiState::new(Theme::Dark);
        ui.cycle_theme();
        assert_eq!(ui.theme, Theme::Light);
    }
}
