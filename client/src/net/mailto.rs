//! `mailto:` fallback link construction.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use super::types::FieldValues;
use crate::util::uri::encode_component;

/// Build `mailto:<to>?subject=<subject>&body=<key: value lines>` with both
/// query values percent-encoded.
pub fn mailto_href(to: &str, subject: &str, fields: &FieldValues) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(subject),
        encode_component(&fields.to_lines())
    )
}
