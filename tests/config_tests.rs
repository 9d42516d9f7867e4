// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_tracker::commands::config::set_base_url;
use budget_tracker::config::{load_from, Config, DEFAULT_BASE_URL};
use tempfile::tempdir;

#[test]
fn missing_file_means_defaults() {
    let dir = tempdir().unwrap();
    let cfg = load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn flag_beats_file_beats_default() {
    let cfg = Config {
        base_url: "http://budget.lan:8080".into(),
    };
    assert_eq!(cfg.resolve_base_url(None).unwrap(), "http://budget.lan:8080");
    assert_eq!(
        cfg.resolve_base_url(Some("http://127.0.0.1:5001")).unwrap(),
        "http://127.0.0.1:5001"
    );
}

#[test]
fn set_base_url_round_trips_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let saved = set_base_url(&path, "http://192.168.1.20:5001/").unwrap();
    assert_eq!(saved, "http://192.168.1.20:5001");
    assert_eq!(load_from(&path).unwrap().base_url, "http://192.168.1.20:5001");
}

#[test]
fn rejects_non_http_urls() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    assert!(set_base_url(&path, "ftp://example.com").is_err());
    assert!(set_base_url(&path, "not a url").is_err());
    assert!(!path.exists());
}

#[test]
fn empty_file_object_falls_back_to_default_url() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();
    assert_eq!(load_from(&path).unwrap().base_url, DEFAULT_BASE_URL);
}

#[test]
fn base_url_flag_is_validated() {
    let cfg = Config::default();
    assert_eq!(cfg.resolve_base_url(None).unwrap(), DEFAULT_BASE_URL);
    assert_eq!(
        cfg.resolve_base_url(Some("http://127.0.0.1:5001/")).unwrap(),
        "http://127.0.0.1:5001"
    );
    let err = cfg.resolve_base_url(Some("localhost:5001")).unwrap_err();
    assert!(format!("{:#}", err).starts_with("Bad --base-url"));
    assert!(cfg.resolve_base_url(Some("htp//typo")).is_err());
}
