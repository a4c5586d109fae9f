//! Plain state machines behind the interactive components.
//!
//! These types hold no signals; components wrap them in `RwSignal` and call
//! the transition methods from event handlers.

pub mod form;
pub mod image;
