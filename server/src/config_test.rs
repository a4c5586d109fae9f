use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from("client/dist"));
    assert_eq!(cfg.index_file(), PathBuf::from("client/dist/index.html"));
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 3000 "), ("SITE_DIR", "/srv/flashfy")])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/flashfy"));
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "0", "70000", "-1", ""] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: raw.to_owned() }, "PORT={raw:?}");
    }
}

#[test]
fn blank_site_dir_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SITE_DIR", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptySiteDir);
}

#[test]
fn error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort { value: "x".into() }.to_string().contains("PORT"));
    assert!(ConfigError::EmptySiteDir.to_string().contains("SITE_DIR"));
}
