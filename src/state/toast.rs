#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// CSS modifier class for the toast element.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
        }
    }
}

/// Transient notification state.
///
/// `seq` increments on every `show` so the auto-dismiss timer can tell
/// whether its toast is still the current one before hiding it.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    pub seq: u64,
}

impl ToastState {
    /// Display a new toast, superseding whatever was showing.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.seq += 1;
    }
}
