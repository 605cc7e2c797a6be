use thiserror::Error;

use super::{
    flags::{TransientFlags, COPY_ACK, COPY_EMAIL},
    schedule::Scheduler,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Platform clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes `text` and raises the `copy-email` acknowledgment for
/// [`COPY_ACK`]. A failed write is logged and leaves the flags untouched.
/// Returns whether the copy succeeded.
pub async fn copy_to_clipboard<C, S>(clipboard: &C, flags: &TransientFlags<S>, text: &str) -> bool
where
    C: Clipboard,
    S: Scheduler + 'static,
{
    match clipboard.write(text).await {
        Ok(()) => {
            flags.activate(COPY_EMAIL, COPY_ACK);
            log::debug!("copied {text} to clipboard");
            true
        }
        Err(err) => {
            log::error!("Failed to copy {text}: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, time::Duration};

    use super::*;
    use crate::interaction::schedule::ManualScheduler;

    #[derive(Default)]
    struct FakeClipboard {
        contents: RefCell<Option<String>>,
        deny: bool,
    }

    impl Clipboard for FakeClipboard {
        async fn write(&self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::WriteFailed("permission denied".to_string()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_copy_success_acknowledges_for_two_seconds() {
        let sched = ManualScheduler::new();
        let flags = TransientFlags::new(sched.clone());
        let clipboard = FakeClipboard::default();

        assert!(copy_to_clipboard(&clipboard, &flags, "user@example.com").await);
        assert_eq!(
            clipboard.contents.borrow().as_deref(),
            Some("user@example.com")
        );
        assert!(flags.is_active(COPY_EMAIL));

        sched.advance(Duration::from_millis(1999));
        assert!(flags.is_active(COPY_EMAIL));
        sched.advance(Duration::from_millis(1));
        assert!(!flags.is_active(COPY_EMAIL));
    }

    #[tokio::test]
    async fn test_copy_failure_is_swallowed() {
        let sched = ManualScheduler::new();
        let flags = TransientFlags::new(sched.clone());
        let clipboard = FakeClipboard {
            deny: true,
            ..Default::default()
        };

        assert!(!copy_to_clipboard(&clipboard, &flags, "user@example.com").await);
        assert!(!flags.is_active(COPY_EMAIL));
        assert_eq!(sched.pending(), 0);
        sched.advance(COPY_ACK);
        assert!(!flags.is_active(COPY_EMAIL));
    }

    #[test]
    fn test_error_message() {
        let err = ClipboardError::WriteFailed("denied".to_string());
        assert_eq!(err.to_string(), "Clipboard write failed: denied");
    }
}
