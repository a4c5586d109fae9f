//! Lead delivery: remote email API with a local `mailto:` fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` decides between the two paths, `emailjs` talks to the remote
//! service, `mailto` builds the fallback link, and `types` holds the field
//! records both paths consume.

pub mod emailjs;
pub mod gateway;
pub mod mailto;
pub mod types;
