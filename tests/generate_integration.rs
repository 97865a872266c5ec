//! Integration test for the full generation pipeline.
//!
//! Parses a small descriptor set, resolves its composition model, and
//! writes the rendered files into a temp directory through the bundled
//! template.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use clientgen::{Indent, Templates, WriteOptions, parse_models, write_models};
use tempfile::TempDir;

const MODELS_JSON: &str = r#"[
  {
    "name": "BaseEntity",
    "export": "interface",
    "properties": [
      {"name": "id", "export": "generic", "type": "String"},
      {"name": "createdAt", "export": "generic", "type": "String", "isNullable": true}
    ]
  },
  {
    "name": "User",
    "export": "all-of",
    "properties": [
      {"name": "", "export": "reference", "type": "BaseEntity"},
      {
        "name": "",
        "export": "interface",
        "properties": [
          {"name": "email", "export": "generic", "type": "String"}
        ]
      }
    ]
  },
  {
    "name": "Status",
    "export": "enum",
    "enum": [
      {"name": "ACTIVE", "value": "active"},
      {"name": "ARCHIVED", "value": "archived"}
    ]
  },
  {"name": "Empty", "export": "interface"}
]"#;

#[tokio::test]
async fn test_generate_writes_one_file_per_non_empty_model() {
    let models = parse_models(MODELS_JSON).unwrap();
    let templates = Templates::builtin().unwrap();
    let out = TempDir::new().unwrap();
    let options = WriteOptions::new(out.path(), "com.example.api");

    write_models(models, &templates, &options).await.unwrap();

    // One file per non-empty model, none for the empty one
    assert!(out.path().join("BaseEntity.kt").is_file());
    assert!(out.path().join("User.kt").is_file());
    assert!(out.path().join("Status.kt").is_file());
    assert!(!out.path().join("Empty.kt").exists());

    // The composition model is flattened: base fields plus the inline
    // sub-object's fields, reported as a plain data class
    let user = fs::read_to_string(out.path().join("User.kt")).unwrap();
    assert!(user.contains("package com.example.api"), "{user}");
    assert!(user.contains("data class User("), "{user}");
    assert!(user.contains("    val id: String,"), "{user}");
    assert!(user.contains("    val createdAt: String?,"), "{user}");
    assert!(user.contains("    val email: String,"), "{user}");

    // The referenced base model is emitted as an open type
    let base = fs::read_to_string(out.path().join("BaseEntity.kt")).unwrap();
    assert!(base.contains("open class BaseEntity("), "{base}");
    assert!(base.contains("    open val id: String,"), "{base}");

    let status = fs::read_to_string(out.path().join("Status.kt")).unwrap();
    assert!(status.contains("enum class Status {"), "{status}");
    assert!(status.contains("    ACTIVE,"), "{status}");
    assert!(status.ends_with("}\n"), "{status}");
}

#[tokio::test]
async fn test_generate_honors_extension_and_indent() {
    let models = parse_models(MODELS_JSON).unwrap();
    let templates = Templates::builtin().unwrap();
    let out = TempDir::new().unwrap();
    let options = WriteOptions {
        extension: "kts".to_string(),
        indent: Indent::Two,
        ..WriteOptions::new(out.path(), "com.example.api")
    };

    write_models(models, &templates, &options).await.unwrap();

    assert!(out.path().join("Status.kts").is_file());
    assert!(!out.path().join("Status.kt").exists());

    let status = fs::read_to_string(out.path().join("Status.kts")).unwrap();
    assert!(status.contains("  ACTIVE,"), "{status}");
    assert!(!status.contains("    ACTIVE,"), "{status}");
}

#[tokio::test]
async fn test_generate_fails_when_output_dir_is_a_file() {
    let models = parse_models(MODELS_JSON).unwrap();
    let templates = Templates::builtin().unwrap();
    let out = TempDir::new().unwrap();
    let blocker = out.path().join("occupied");
    fs::write(&blocker, "not a directory").unwrap();

    let options = WriteOptions::new(&blocker, "com.example.api");
    let err = write_models(models, &templates, &options).await.unwrap_err();
    assert!(err.contains("Failed to create output directory"), "{err}");
}

#[tokio::test]
async fn test_generate_cyclic_composition_fails() {
    let models = parse_models(
        r#"[
          {"name": "A", "export": "all-of", "properties": [{"name": "", "export": "reference", "type": "B"}]},
          {"name": "B", "export": "all-of", "properties": [{"name": "", "export": "reference", "type": "A"}]}
        ]"#,
    )
    .unwrap();
    let templates = Templates::builtin().unwrap();
    let out = TempDir::new().unwrap();

    let options = WriteOptions::new(out.path(), "com.example.api");
    let err = write_models(models, &templates, &options).await.unwrap_err();
    assert!(err.contains("Cyclic composition"), "{err}");
}
