//! The typed fatal-signal payload.

/// The abnormal control transfer raised by the double's fatal-family methods.
///
/// Carried as a panic payload via [`std::panic::panic_any`] and recognized by
/// downcast inside [`capture_fatal`](crate::capture_fatal). The concrete type
/// is what distinguishes an intended fatal failure from a genuine defect: any
/// other panic payload is resumed unchanged.
#[derive(Debug, thiserror::Error)]
#[error("fatal: {message}")]
pub struct FatalSignal {
    /// The formatted fatal message. Empty for a bare `fail_now()`.
    pub message: String,
}

impl FatalSignal {
    /// Creates a fatal signal carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
