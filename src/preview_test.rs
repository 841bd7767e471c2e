use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = PreviewConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
}

#[test]
fn reads_port_and_dist_dir() {
    let config = PreviewConfig::from_lookup(lookup(&[("PORT", " 3000 "), ("FOLIO_DIST_DIR", "site/out")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.dist_dir, PathBuf::from("site/out"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = PreviewConfig::from_lookup(lookup(&[("PORT", ""), ("FOLIO_DIST_DIR", "  ")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
}

#[test]
fn rejects_unparsable_port() {
    let err = PreviewConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, PreviewError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(matches!(
        PreviewConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(PreviewError::InvalidPort(_))
    ));
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
