//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates `window` access behind the `csr` feature so pages and
//! controllers stay testable natively; `uri` holds percent-encoding rules.

pub mod browser;
pub mod uri;
