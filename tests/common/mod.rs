//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use chrono::{DateTime, TimeZone, Utc};

/// Reference date the sample account is analysed at
pub const AS_OF: &str = "2026-01-01";

pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn sample_input() -> PathBuf {
    fixture_path("sample_input.json")
}

pub fn valid_config_fixture() -> PathBuf {
    fixture_path("valid_config.toml")
}

pub fn invalid_config_fixture() -> PathBuf {
    fixture_path("invalid_config.toml")
}

/// The binary, isolated from any real user configuration and environment
/// overrides: HOME, XDG_CONFIG_HOME and the working directory all point at
/// `scratch`.
pub fn radar_cmd(scratch: &Path) -> Command {
    let mut cmd = Command::cargo_bin("persona-radar").unwrap();
    cmd.current_dir(scratch)
        .env("HOME", scratch)
        .env("XDG_CONFIG_HOME", scratch.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("PERSONA_RADAR_CONFIG")
        .env_remove("PERSONA_RADAR_HIDDEN_PERSONAS")
        .env_remove("PERSONA_RADAR_EASTER_EGG")
        .env_remove("PERSONA_RADAR_PRETTY")
        .env_remove("PERSONA_RADAR_OUTPUT")
        .env_remove("PERSONA_RADAR_LOG_LEVEL")
        .env_remove("PERSONA_RADAR_LOG_FILE")
        .env_remove("PERSONA_RADAR_LOG_JSON");
    cmd
}
