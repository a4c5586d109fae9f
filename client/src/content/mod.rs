//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf data only: the product catalog, informational page copy, FAQ and
//! trust-bar entries, navigation link tables and the static image contract.
//! Everything is `'static` and never mutated; page renderers read it directly.

pub mod assets;
pub mod catalog;
pub mod pages;
pub mod site;
