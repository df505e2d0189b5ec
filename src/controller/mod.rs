// List Controller Module - Query-Synchronized View State
//
// Owns ListViewState and the binding between list parameters and the
// shareable location descriptor. Mutations never fetch directly: they
// navigate, and the navigation event is the single place a fetch starts,
// so the on-screen list and the descriptor can never drift apart.

pub mod list;
pub mod navigation;


pub use list::{ListController, ListEvent, ListViewState};
pub use navigation::LocationBus;
