//! Shared layout pieces used across pages.

pub mod category_grid;
pub mod footer;
pub mod header;
pub mod safe_img;
pub mod trust_bar;
