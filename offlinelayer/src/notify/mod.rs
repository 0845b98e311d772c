//! User-facing notifications.
//!
//! The original feature surfaced setup outcomes as UI toasts. The trait
//! keeps that capability pluggable; correctness never depends on it.

/// Fire-and-forget user message (toast or equivalent in the host UI).
pub trait Notifier: Send + Sync {
    /// Deliver a message to the user. Must not block or fail.
    fn notify(&self, message: &str);
}

/// Notifier that routes messages to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Notifier that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Notifier that collects messages for assertions.
    #[derive(Default)]
    pub struct CollectingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl CollectingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for CollectingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_collecting_notifier() {
        let notifier = CollectingNotifier::default();
        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_null_notifier_is_silent() {
        // Nothing to observe; this just exercises the impl.
        NullNotifier.notify("dropped");
    }
}
