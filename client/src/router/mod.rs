//! Fragment-based routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL fragment is the only routing signal. `location` turns the raw
//! `window.location.hash` into a normalized path + query, and `dispatch`
//! picks the page for that path from a fixed, ordered route table. Both are
//! pure; the root `App` component owns the one `Location` signal.

pub mod dispatch;
pub mod location;

pub use dispatch::{Route, dispatch};
pub use location::Location;
