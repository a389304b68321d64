//! Startup behavior — the server must refuse to run without an API key.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_api_key_aborts_startup() {
    Command::cargo_bin("dharohar_server")
        .expect("binary exists")
        .env_remove("GEMINI_API_KEY")
        .env("PORT", "0")
        // Keep dotenvy from picking up a developer's .env file.
        .current_dir(std::env::temp_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("MissingApiKey"));
}

#[test]
fn blank_api_key_is_rejected_like_a_missing_one() {
    Command::cargo_bin("dharohar_server")
        .expect("binary exists")
        .env("GEMINI_API_KEY", "   ")
        .env("PORT", "0")
        .current_dir(std::env::temp_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("MissingApiKey"));
}
