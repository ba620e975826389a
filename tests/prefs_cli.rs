mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn get_serves_the_compiled_in_default_before_any_set() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prefs", "get", "crossfade_ms"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2000\n"));
}

#[test]
fn set_then_get_round_trips_through_the_preference_file() {
    let ctx = TestContext::new();

    ctx.cli().args(["prefs", "set", "music_enabled", "false"]).assert().success();
    ctx.cli()
        .args(["prefs", "get", "music_enabled"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));

    assert!(ctx.storage_root().join("Companion/preferences.toml").is_file());
}

#[test]
fn reset_restores_all_defaults() {
    let ctx = TestContext::new();

    ctx.cli().args(["prefs", "set", "crossfade_ms", "10"]).assert().success();
    ctx.cli().args(["prefs", "reset"]).assert().success();
    ctx.cli()
        .args(["prefs", "get", "crossfade_ms"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2000\n"));
}

#[test]
fn unknown_key_lists_the_valid_keys() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prefs", "get", "widget_rows"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown preference key 'widget_rows'"))
        .stderr(predicate::str::contains("scripts_path"));
}

#[test]
fn mistyped_value_is_rejected_before_persisting() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prefs", "set", "crossfade_ms", "fast"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected a duration in milliseconds"));

    assert!(!ctx.storage_root().join("Companion/preferences.toml").exists());
}
