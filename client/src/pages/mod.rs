//! One module per routed page. `lead_form` is the shared form body behind
//! `quote` and `contact`.

pub mod categories;
pub mod contact;
pub mod faq;
pub mod home;
pub mod info;
pub mod lead_form;
pub mod not_found;
pub mod product;
pub mod quote;
