//! Build script for persona-radar
//!
//! Embeds git revision, build timestamp, target and rustc version so the
//! `version` command can report exactly what was built.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let git_hash = run("git", &["rev-parse", "--short=8", "HEAD"]);
    let git_branch = run("git", &["rev-parse", "--abbrev-ref", "HEAD"]);
    let git_dirty = git_dirty();
    let rustc_version = run("rustc", &["--version"]);
    let build_timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let vars = [
        ("PERSONA_RADAR_GIT_HASH", git_hash),
        ("PERSONA_RADAR_GIT_BRANCH", git_branch),
        ("PERSONA_RADAR_GIT_DIRTY", git_dirty.to_string()),
        ("PERSONA_RADAR_BUILD_TIMESTAMP", build_timestamp),
        ("PERSONA_RADAR_TARGET", cargo_var("TARGET")),
        ("PERSONA_RADAR_PROFILE", cargo_var("PROFILE")),
        ("PERSONA_RADAR_RUSTC_VERSION", rustc_version),
    ];

    for (name, value) in &vars {
        println!("cargo:rustc-env={}={}", name, value);
    }
}

fn cargo_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| "unknown".to_string())
}

/// Trimmed stdout of a command, or "unknown" if it fails
fn run(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_dirty() -> &'static str {
    match Command::new("git").args(["status", "--porcelain"]).output() {
        Ok(output) if output.status.success() => {
            if output.stdout.is_empty() {
                "false"
            } else {
                "true"
            }
        }
        _ => "unknown",
    }
}
