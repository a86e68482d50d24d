#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome-level UI state: dark mode and the active toast.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub toast: Option<Toast>,
    toast_seq: u64,
}

/// A transient notification banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    /// Generation marker so a delayed auto-dismiss cannot remove a newer
    /// toast that replaced this one.
    pub seq: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl UiState {
    /// State seeded with a resolved dark mode preference.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Show a toast, replacing any current one. Returns its generation.
    pub fn show_toast(&mut self, variant: ToastVariant, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            message: message.into(),
            variant,
            seq: self.toast_seq,
        });
        self.toast_seq
    }

    pub fn show_success(&mut self, message: impl Into<String>) -> u64 {
        self.show_toast(ToastVariant::Success, message)
    }

    pub fn show_error(&mut self, message: impl Into<String>) -> u64 {
        self.show_toast(ToastVariant::Error, message)
    }

    /// Dismiss unconditionally (close button).
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Dismiss only if the toast from generation `seq` is still showing.
    pub fn dismiss_if_current(&mut self, seq: u64) {
        if self.toast.as_ref().map_or(false, |t| t.seq == seq) {
            self.toast = None;
        }
    }
}
