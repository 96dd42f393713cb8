//! View-state store and page navigation.
//!
//! State changes go through [`ViewState::apply`], a reducer that takes an
//! [`Action`] and may hand back an [`Effect`] for the app to perform.

mod page;
mod view_state;

pub use page::Page;
pub use view_state::{Action, Effect, ViewState};
