//! Document ownership: caller-owned (controlled) or widget-owned
//! (uncontrolled).

use richedit_core::DocumentState;
use std::fmt;

/// Callback receiving every new document of a controlled editor.
pub type ChangeHandler = Box<dyn FnMut(DocumentState) + Send>;

/// Who owns the document an editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipMode {
    Controlled,
    Uncontrolled,
}

impl OwnershipMode {
    /// Controlled iff both a value and a change handler are supplied.
    pub fn derive(has_value: bool, has_on_change: bool) -> Self {
        if has_value && has_on_change {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

impl fmt::Display for OwnershipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled => f.write_str("controlled"),
            Self::Uncontrolled => f.write_str("uncontrolled"),
        }
    }
}

/// Ownership of the editor document, fixed when the editor is created.
pub enum Ownership {
    /// The caller holds `value` and is told about changes through
    /// `on_change`; the editor never replaces `value` itself.
    Controlled {
        value: DocumentState,
        on_change: ChangeHandler,
    },
    /// The editor keeps the document in its own slot.
    Uncontrolled { slot: DocumentState },
}

impl fmt::Debug for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled { value, .. } => f
                .debug_struct("Controlled")
                .field("value", value)
                .finish_non_exhaustive(),
            Self::Uncontrolled { slot } => {
                f.debug_struct("Uncontrolled").field("slot", slot).finish()
            }
        }
    }
}

impl Ownership {
    pub fn controlled(value: DocumentState, on_change: ChangeHandler) -> Self {
        Self::Controlled { value, on_change }
    }

    pub fn uncontrolled(initial: DocumentState) -> Self {
        Self::Uncontrolled { slot: initial }
    }

    pub fn mode(&self) -> OwnershipMode {
        match self {
            Self::Controlled { .. } => OwnershipMode::Controlled,
            Self::Uncontrolled { .. } => OwnershipMode::Uncontrolled,
        }
    }

    /// The document currently in effect: the caller's value when controlled,
    /// the internal slot otherwise.
    pub fn resolve(&self) -> &DocumentState {
        match self {
            Self::Controlled { value, .. } => value,
            Self::Uncontrolled { slot } => slot,
        }
    }

    /// Route `next` to its owner.
    ///
    /// Controlled: `on_change(next)` runs and nothing is stored.
    /// Uncontrolled: the slot is replaced and no callback runs.
    pub fn apply_change(&mut self, next: DocumentState) {
        match self {
            Self::Controlled { on_change, .. } => on_change(next),
            Self::Uncontrolled { slot } => *slot = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_handler() -> (ChangeHandler, Arc<Mutex<Vec<DocumentState>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler: ChangeHandler = Box::new(move |state| {
            sink.lock().expect("sink").push(state);
        });
        (handler, seen)
    }

    #[test]
    fn mode_requires_both_value_and_handler() {
        assert_eq!(OwnershipMode::derive(true, true), OwnershipMode::Controlled);
        assert_eq!(OwnershipMode::derive(true, false), OwnershipMode::Uncontrolled);
        assert_eq!(OwnershipMode::derive(false, true), OwnershipMode::Uncontrolled);
        assert_eq!(OwnershipMode::derive(false, false), OwnershipMode::Uncontrolled);
    }

    #[test]
    fn controlled_changes_go_only_to_handler() {
        let value = DocumentState::create_from_text("caller");
        let (handler, seen) = recording_handler();
        let mut ownership = Ownership::controlled(value.clone(), handler);

        let next = value.insert_text("!");
        ownership.apply_change(next.clone());

        assert!(ownership.resolve().same_identity(&value));
        let seen = seen.lock().expect("seen");
        assert_eq!(seen.len(), 1);
        assert!(seen[0].same_identity(&next));
    }

    #[test]
    fn uncontrolled_changes_replace_the_slot() {
        let mut ownership = Ownership::uncontrolled(DocumentState::create_empty());
        let next = DocumentState::create_from_text("typed");
        ownership.apply_change(next.clone());
        assert!(ownership.resolve().same_identity(&next));
        assert_eq!(ownership.mode(), OwnershipMode::Uncontrolled);
    }
}
