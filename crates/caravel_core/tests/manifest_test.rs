//! Tests for manifest loading.

use caravel_core::{Manifest, MediaDescriptor};
use std::io::Write;

#[test]
fn test_parse_preserves_order() {
    let manifest = Manifest::from_json_str(
        r#"[
            {"id": "first", "url": "https://images.example.com/1.jpg", "title": "One", "description": "x"},
            {"id": "second", "url": "https://images.example.com/2.jpg", "title": "Two", "description": ""},
            {"id": "third", "url": "https://images.example.com/3.jpg", "title": "Three", "description": "z"}
        ]"#,
    )
    .unwrap();

    let ids: Vec<&str> = manifest
        .descriptors()
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn test_missing_description_defaults_to_empty() {
    let manifest = Manifest::from_json_str(
        r#"[{"id": "a", "url": "https://images.example.com/a.jpg", "title": "A"}]"#,
    )
    .unwrap();

    assert_eq!(manifest.descriptors()[0].description, "");
}

#[test]
fn test_invalid_json_is_an_error() {
    let result = Manifest::from_json_str("{not a manifest}");
    assert!(result.is_err());
}

#[test]
fn test_from_file() {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    writeln!(
        temp_file,
        r#"[{{"id": "on-disk", "url": "https://images.example.com/d.jpg", "title": "Disk", "description": ""}}]"#
    )
    .unwrap();

    let manifest = Manifest::from_file(temp_file.path()).unwrap();
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.descriptors()[0].id, "on-disk");
}

#[test]
fn test_missing_file_is_an_error() {
    let result = Manifest::from_file("no/such/manifest.json");
    assert!(result.is_err());
}

#[test]
fn test_load_falls_back_to_bundled_sample() {
    // No explicit path and no manifest.json in the test working
    // directory, so the bundled sample is used.
    let manifest = Manifest::load(None).unwrap();
    assert!(!manifest.is_empty());
}

#[test]
fn test_manifest_from_descriptor_vec() {
    let descriptors = vec![MediaDescriptor {
        id: "a".to_string(),
        source_url: "https://images.example.com/a.jpg".to_string(),
        title: "A".to_string(),
        description: String::new(),
    }];

    let manifest = Manifest::from(descriptors);
    assert_eq!(manifest.len(), 1);
}
