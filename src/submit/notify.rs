//! Notification sink trait for interface-agnostic status messages
//!
//! The controller reports each submit attempt through this trait.
//! - CLI implementations can draw spinners and styled lines
//! - GUI hosts can raise toasts

/// User-facing message texts
pub mod messages {
    /// Validation flagged at least one field
    pub const INVALID_FIELDS: &str = "Please fill in all required fields correctly.";
    /// Relay call started
    pub const SUBMITTING: &str = "Submitting your message...";
    /// Relay accepted the message
    pub const SENT: &str = "Thank you for connecting! Please check your email.";
    /// Relay failed, rejected or timed out
    pub const RELAY_FAILED: &str = "Something went wrong. Please try again later.";
}

/// Notification sink trait
///
/// Calls are synchronous and must not block. A loading notification raised
/// for an attempt is always dismissed before that attempt's success or
/// error notification.
pub trait NotificationSink: Send + Sync {
    /// Show a loading notification that stays until dismissed
    fn show_loading(&self, message: &str);

    /// Show a transient success notification
    fn show_success(&self, message: &str);

    /// Show a transient error notification
    fn show_error(&self, message: &str);

    /// Dismiss the active loading notification
    fn dismiss_active(&self);
}

/// No-op sink for headless use or when notifications aren't needed
pub struct NoopNotifier;

impl NotificationSink for NoopNotifier {
    fn show_loading(&self, _message: &str) {}
    fn show_success(&self, _message: &str) {}
    fn show_error(&self, _message: &str) {}
    fn dismiss_active(&self) {}
}
