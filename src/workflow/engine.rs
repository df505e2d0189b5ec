//! Legal status transitions per current status.
//!
//! The table is the whole engine: no internal state, no hidden flags.
//! Pinned and Publish are mutually exclusive visible states, so "un-pin"
//! is a transition back to Publish rather than a boolean toggle. Recycle
//! has the richest set of exits so operators can always rescue content;
//! nothing here transitions *into* Recycle (removal is a separate
//! destructive service call, not a workflow step).

use super::status::ArticleStatus;

/// Operator verb attached to a transition, in menu wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    Publish,
    Pin,
    Unpin,
    MoveToDraft,
}

impl TransitionAction {
    /// Label shown in the per-row action menu.
    pub fn label(&self) -> &'static str {
        match self {
            TransitionAction::Publish => "publish",
            TransitionAction::Pin => "pin",
            TransitionAction::Unpin => "un-pin",
            TransitionAction::MoveToDraft => "move-to-draft",
        }
    }
}

/// One legal exit from a status: the menu verb and the status it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: TransitionAction,
    pub target: ArticleStatus,
}

const fn transition(action: TransitionAction, target: ArticleStatus) -> Transition {
    Transition { action, target }
}

const FROM_RECYCLE: [Transition; 3] = [
    transition(TransitionAction::MoveToDraft, ArticleStatus::Draft),
    transition(TransitionAction::Publish, ArticleStatus::Publish),
    transition(TransitionAction::Pin, ArticleStatus::Pinned),
];

const FROM_DRAFT: [Transition; 2] = [
    transition(TransitionAction::Publish, ArticleStatus::Publish),
    transition(TransitionAction::Pin, ArticleStatus::Pinned),
];

const FROM_PUBLISH: [Transition; 2] = [
    transition(TransitionAction::MoveToDraft, ArticleStatus::Draft),
    transition(TransitionAction::Pin, ArticleStatus::Pinned),
];

const FROM_PINNED: [Transition; 2] = [
    transition(TransitionAction::Unpin, ArticleStatus::Publish),
    transition(TransitionAction::MoveToDraft, ArticleStatus::Draft),
];

/// Legal exits from `status`, in menu presentation order.
pub fn legal_transitions(status: ArticleStatus) -> &'static [Transition] {
    match status {
        ArticleStatus::Recycle => &FROM_RECYCLE,
        ArticleStatus::Draft => &FROM_DRAFT,
        ArticleStatus::Publish => &FROM_PUBLISH,
        ArticleStatus::Pinned => &FROM_PINNED,
    }
}

/// Whether `current -> target` appears in the transition table.
pub fn is_legal(current: ArticleStatus, target: ArticleStatus) -> bool {
    legal_transitions(current).iter().any(|t| t.target == target)
}
