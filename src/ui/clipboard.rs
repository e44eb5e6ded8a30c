/// Clipboard copy with manual fallback
///
/// The system clipboard can refuse writes (no clipboard owner, sandboxing,
/// headless sessions). After writing we read the clipboard back; if the
/// text did not land there the user gets the raw snippet to copy by hand.

use iced::{clipboard, Task};
use tracing::{debug, warn};

use crate::folder::FolderKey;
use crate::Message;

/// Which snippet a copy action was for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    /// Markup of the icon in the code popup
    Markup,
    /// Single-icon stylesheet in the code popup
    Stylesheet,
    /// Whole-folder stylesheet from a gallery header
    Group(FolderKey),
}

/// Result of a copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyTarget),
    /// The clipboard did not accept the text; show it for manual copying
    ManualCopy { target: CopyTarget, text: String },
}

/// Write `text` to the clipboard and report whether it stuck
pub fn copy(target: CopyTarget, text: String) -> Task<Message> {
    debug!("📋 Copying {:?} ({} bytes)", target, text.len());

    clipboard::write::<Message>(text.clone()).chain(
        clipboard::read().map(move |read_back| {
            Message::CopyFinished(verify(target.clone(), &text, read_back))
        }),
    )
}

/// Compare what we wrote with what the clipboard now holds
pub fn verify(target: CopyTarget, expected: &str, read_back: Option<String>) -> CopyOutcome {
    match read_back {
        Some(actual) if actual == expected => CopyOutcome::Copied(target),
        _ => {
            warn!("⚠️  Clipboard write for {:?} did not stick, falling back to manual copy", target);
            CopyOutcome::ManualCopy {
                target,
                text: expected.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_success() {
        let outcome = verify(CopyTarget::Markup, "<span/>", Some("<span/>".to_string()));
        assert_eq!(outcome, CopyOutcome::Copied(CopyTarget::Markup));
    }

    #[test]
    fn test_verify_empty_clipboard_falls_back() {
        let outcome = verify(CopyTarget::Stylesheet, ".a {}", None);
        assert_eq!(
            outcome,
            CopyOutcome::ManualCopy {
                target: CopyTarget::Stylesheet,
                text: ".a {}".to_string(),
            }
        );
    }

    #[test]
    fn test_verify_mismatch_falls_back() {
        let target = CopyTarget::Group(FolderKey::Root);
        let outcome = verify(target.clone(), ".icon {}", Some("something else".to_string()));
        assert!(matches!(outcome, CopyOutcome::ManualCopy { target: t, .. } if t == target));
    }
}
