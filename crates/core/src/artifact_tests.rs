// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
}

fn sample() -> Artifact {
    Artifact::new(
        "art-1".into(),
        "Block trackers".into(),
        ArtifactType::Filter,
        "DOMAIN-SUFFIX,tracker.example,REJECT".into(),
        at(8),
    )
}

#[parameterized(
    rewrite = { "rewrite", ArtifactType::Rewrite },
    redirect = { "redirect", ArtifactType::Redirect },
    script = { "script", ArtifactType::Script },
    rule = { "rule", ArtifactType::Rule },
    filter = { "filter", ArtifactType::Filter },
    header = { "HEADER", ArtifactType::Header },
)]
fn artifact_type_parses(input: &str, expected: ArtifactType) {
    assert_eq!(input.parse::<ArtifactType>().unwrap(), expected);
}

#[test]
fn artifact_type_rejects_unknown() {
    let err = "macro".parse::<ArtifactType>().unwrap_err();
    assert!(matches!(err, Error::InvalidArtifactType(ref s) if s == "macro"));
}

#[test]
fn artifact_type_display_matches_as_str() {
    for t in ArtifactType::ALL {
        assert_eq!(t.to_string(), t.as_str());
        assert_eq!(t.as_str().parse::<ArtifactType>().unwrap(), t);
    }
}

#[test]
fn new_artifact_is_enabled_with_equal_timestamps() {
    let a = sample();
    assert!(a.is_enabled);
    assert_eq!(a.created_at, a.updated_at);
    assert!(a.description.is_none());
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
)]
fn validate_rejects_blank_name(name: &str) {
    let mut a = sample();
    a.name = name.into();
    assert!(matches!(a.validate(), Err(Error::Validation(_))));
}

#[test]
fn validate_rejects_bad_id() {
    let mut a = sample();
    a.id = "has space".into();
    assert!(matches!(a.validate(), Err(Error::Validation(_))));
}

#[test]
fn duplicate_copies_body_under_new_identity() {
    let mut a = sample();
    a.description = Some("ads".into());
    a.is_enabled = false;
    a.extra.insert("color".into(), serde_json::json!("red"));

    let b = a.duplicate_as("art-2".into(), "Block trackers copy".into(), at(9));
    assert_ne!(a.id, b.id);
    assert_eq!(a.content, b.content);
    assert_eq!(a.artifact_type, b.artifact_type);
    assert_eq!(a.description, b.description);
    assert!(!b.is_enabled);
    assert_eq!(b.created_at, at(9));
    assert!(b.extra.is_empty());
}

#[test]
fn copy_name_adds_counter_when_taken() {
    let names = ["Rules", "Rules copy", "Rules copy 2"];
    assert_eq!(copy_name("Other", names.iter().copied()), "Other copy");
    assert_eq!(copy_name("Rules", names.iter().copied()), "Rules copy 3");
}

#[test]
fn serializes_with_camel_case_and_type_key() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["type"], "filter");
    assert_eq!(json["isEnabled"], true);
    assert!(json.get("createdAt").is_some());
    assert!(json.get("description").is_none());
}

#[test]
fn unknown_fields_survive_round_trip() {
    let json = serde_json::json!({
        "id": "art-9",
        "name": "Legacy",
        "type": "script",
        "content": "console.log(1)",
        "createdAt": "2026-03-01T08:00:00Z",
        "updatedAt": "2026-03-01T08:00:00Z",
        "icon": "bolt",
        "schedule": {"cron": "0 * * * *"}
    });
    let a: Artifact = serde_json::from_value(json).unwrap();
    assert!(a.is_enabled);
    assert_eq!(a.extra["icon"], "bolt");

    let back = serde_json::to_value(&a).unwrap();
    assert_eq!(back["schedule"]["cron"], "0 * * * *");
}
