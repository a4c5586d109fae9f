//! Fragment parsing and fragment-link helpers.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use super::dispatch::{Route, dispatch};
use crate::util::uri::encode_component;

/// A parsed URL fragment: normalized path, raw query and dispatched route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub route: Route,
}

impl Location {
    /// Parse `window.location.hash` (with or without the leading `#`).
    ///
    /// An absent fragment and a bare `#` both mean `/`. Everything from the
    /// first `?` onward is query and never takes part in route matching.
    pub fn parse(raw: &str) -> Self {
        let fragment = raw.strip_prefix('#').unwrap_or(raw);
        let (path, query) = fragment.split_once('?').unwrap_or((fragment, ""));
        let path = if path.is_empty() && query.is_empty() { "/" } else { path };
        Self { path: path.to_owned(), query: query.to_owned(), route: dispatch(path) }
    }

    /// First value of a query parameter, decoded like `URLSearchParams`.
    pub fn param(&self, key: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::parse("")
    }
}

/// Link to a product page.
pub fn product_href(id: &str) -> String {
    format!("#/product/{id}")
}

/// Link to the quote form with the product field prefilled.
pub fn quote_href(product: &str) -> String {
    format!("#/quote?product={}", encode_component(product))
}
