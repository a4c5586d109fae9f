use super::*;

#[test]
fn encode_component_keeps_unreserved() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_reserved_and_space() {
    assert_eq!(encode_component("a b"), "a%20b");
    assert_eq!(encode_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
    assert_eq!(encode_component("name: value\nnext"), "name%3A%20value%0Anext");
    assert_eq!(encode_component("+"), "%2B");
}

#[test]
fn encode_component_escapes_utf8_bytes() {
    assert_eq!(encode_component("5–15"), "5%E2%80%9315");
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn encode_component_empty() {
    assert_eq!(encode_component(""), "");
}
