// Status Workflow Module - Publication Lifecycle
//
// The transition table that decides which operator actions are legal from
// each publication status. Stateless by construction: every answer is
// derivable from the current status alone, so the engine cannot drift out
// of sync with a reloaded article list.

pub mod engine;
pub mod status;

pub use engine::{is_legal, legal_transitions, Transition, TransitionAction};
pub use status::{ArticleStatus, UnknownStatus};
