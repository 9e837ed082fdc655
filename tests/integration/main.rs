//! Integration tests for the `locale-kit` CLI.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use assert_cmd::Command;
use common::Fixture;
use predicates::prelude::*;

/// Helper to create a command for the locale-kit binary.
fn locale_kit_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("locale-kit"))
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

/// Test that the CLI shows help.
#[test]
fn test_help() {
    locale_kit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("locales"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("dump"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    locale_kit_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    locale_kit_cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_get_help() {
    locale_kit_cmd()
        .args(["get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY"))
        .stdout(predicate::str::contains("--or-none"));
}

#[test]
fn test_locales_table_marks_active() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--culture", "es-ES", "locales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("es*"))
        .stdout(predicate::str::contains("Español de España"))
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("Deutsch"))
        .stderr(predicate::str::contains("* = active locale"));
}

#[test]
fn test_locales_json_in_file_name_order() {
    let fx = Fixture::new();
    let out = fx.cmd().args(["--culture", "en", "locales", "-o", "json"]).output().unwrap();
    assert!(out.status.success());

    let rows = json(&out.stdout);
    let locales: Vec<&str> =
        rows.as_array().unwrap().iter().map(|r| r["locale"].as_str().unwrap()).collect();
    assert_eq!(locales, vec!["de", "en", "es"]);
    assert_eq!(rows[1]["active"], true);
    assert_eq!(rows[0]["extension"], ".json");
}

#[test]
fn test_get_formats_arguments() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--culture", "es-ES", "get", "Mailbox.Notification", "Ana", "3"])
        .assert()
        .success()
        .stdout("Ana, tienes 3 mensajes\n");
}

#[test]
fn test_get_argument_mismatch_fails() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--culture", "es", "get", "Mailbox.Notification", "Ana"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Mailbox.Notification"));
}

#[test]
fn test_get_missing_key_is_wrapped() {
    let fx = Fixture::new();
    fx.cmd().args(["get", "nope"]).assert().success().stdout("?nope?\n");
    fx.cmd().args(["--symbol", "##", "get", "nope"]).assert().success().stdout("##nope##\n");
}

#[test]
fn test_get_missing_key_strict() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--strict", "get", "nope"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Key 'nope' not found"));

    // --or-none ignores the strict policy.
    fx.cmd().args(["--strict", "get", "nope", "--or-none"]).assert().success().stdout("");
}

#[test]
fn test_get_or_none_formats_present_key() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--culture", "es", "get", "Mailbox.Notification", "Ana", "3", "--or-none"])
        .assert()
        .success()
        .stdout("Ana, tienes 3 mensajes\n");
    fx.cmd()
        .args(["--culture", "es", "get", "Mailbox.Notification", "Ana", "--or-none"])
        .assert()
        .code(2);
    fx.cmd().args(["get", "nope", "Ana", "--or-none"]).assert().success().stdout("");
}

#[test]
fn test_stray_file_beside_locale_is_ignored() {
    let fx = Fixture::new();
    // Sorts before `en.txt` and has no reader.
    fx.write("en.md", "# English notes\nsome prose here\n");
    fx.cmd().args(["--culture", "en", "get", "hello"]).assert().success().stdout("Hello\n");

    let out = fx.cmd().args(["locales", "-o", "json"]).output().unwrap();
    assert!(out.status.success());
    let rows = json(&out.stdout);
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(rows[1]["extension"], ".txt");
}

#[test]
fn test_get_json_output() {
    let fx = Fixture::new();
    let out = fx.cmd().args(["get", "hello", "--locale", "de", "-o", "json"]).output().unwrap();
    assert!(out.status.success());

    let value = json(&out.stdout);
    assert_eq!(value["key"], "hello");
    assert_eq!(value["locale"], "de");
    assert_eq!(value["value"], "Hallo");
}

#[test]
fn test_unknown_locale_exit_code() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["get", "hello", "--locale", "fr"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Locale 'fr' is not available"))
        .stderr(predicate::str::contains("de, en, es"));
}

#[test]
fn test_culture_detected_from_environment() {
    let fx = Fixture::new();
    fx.cmd().env("LC_ALL", "es_ES.UTF-8").args(["get", "hello"]).assert().success().stdout("Hola\n");
    fx.cmd().env("LANG", "en_GB.UTF-8").args(["get", "hello"]).assert().success().stdout("Hello\n");
}

#[test]
fn test_fallback_then_first_available() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--culture", "fr-FR", "--fallback", "en", "get", "hello"])
        .assert()
        .success()
        .stdout("Hello\n");
    fx.cmd()
        .args(["--culture", "fr-FR", "--fallback", "it", "get", "hello"])
        .assert()
        .success()
        .stdout("Hallo\n");
}

#[test]
fn test_resolve_reports_rule() {
    let fx = Fixture::new();
    let out = fx
        .cmd()
        .args(["--culture", "es-AR", "resolve", "-o", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let report = json(&out.stdout);
    assert_eq!(report["locale"], "es");
    assert_eq!(report["strategy"], "culture-language");
    assert_eq!(report["culture"], "es-AR");

    let out = fx
        .cmd()
        .args(["--fallback", "en", "resolve", "-o", "json"])
        .output()
        .unwrap();
    let report = json(&out.stdout);
    assert_eq!(report["locale"], "en");
    assert_eq!(report["strategy"], "fallback");

    fx.cmd()
        .args(["resolve", "--locale", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("requested"));
}

#[test]
fn test_dump_section_as_text() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["dump", "--locale", "es", "--section", "Mailbox", "-o", "text"])
        .assert()
        .success()
        .stdout(
            "Mailbox.Notification = {0}, tienes {1} mensajes\n\
             Mailbox.Title = Bandeja de entrada\n",
        );
}

#[test]
fn test_dump_text_keeps_edge_whitespace() {
    let fx = Fixture::new();
    fx.write("fr.txt", "pad = \\s\\sLigne un\\nLigne deux\\s\n");
    fx.cmd()
        .args(["dump", "--locale", "fr", "-o", "text"])
        .assert()
        .success()
        .stdout("pad = \\s\\sLigne un\\nLigne deux\\s\n");

    let out = fx.cmd().args(["dump", "--locale", "fr", "-o", "json"]).output().unwrap();
    let pad = json(&out.stdout)["pad"].as_str().unwrap().to_string();
    assert!(pad.starts_with("  Ligne un"));
    assert!(pad.ends_with("Ligne deux "));
}

#[test]
fn test_dump_json_keeps_line_breaks() {
    let fx = Fixture::new();
    let out = fx.cmd().args(["dump", "--locale", "es", "-o", "json"]).output().unwrap();
    assert!(out.status.success());

    let entries = json(&out.stdout);
    let multi = entries["Multi"].as_str().unwrap();
    assert_eq!(multi.lines().collect::<Vec<_>>(), vec!["Línea uno", "Línea dos"]);
    assert_eq!(entries["hello"], "Hola");
}

#[test]
fn test_dump_flattens_json_locale() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["dump", "--locale", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mailbox.Title"))
        .stdout(predicate::str::contains("Posteingang"));
}

#[test]
fn test_empty_folder_exit_code() {
    let fx = Fixture::empty();
    fx.cmd()
        .arg("locales")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No locales available"));
}

#[test]
fn test_missing_folder_exit_code() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--dir", "does-not-exist", "locales"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_malformed_file_exit_code() {
    let fx = Fixture::new();
    fx.write("fr.txt", "hello = Bonjour\nthis line has no separator\n");
    fx.cmd()
        .args(["get", "hello", "--locale", "fr"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("fr"));
}

#[test]
fn test_project_config_and_env_overrides() {
    let fx = Fixture::new();
    std::fs::write(fx.root().join(".locale-kit.yaml"), "fallback_locale: en\nnot_found_symbol: '!'\n")
        .unwrap();

    fx.cmd().args(["get", "hello"]).assert().success().stdout("Hello\n");
    fx.cmd().args(["get", "nope"]).assert().success().stdout("!nope!\n");
    fx.cmd()
        .env("LOCALE_KIT_FALLBACK", "es")
        .args(["get", "hello"])
        .assert()
        .success()
        .stdout("Hola\n");
    // Flags beat the environment.
    fx.cmd()
        .env("LOCALE_KIT_FALLBACK", "es")
        .args(["--fallback", "de", "get", "hello"])
        .assert()
        .success()
        .stdout("Hallo\n");
}

#[test]
fn test_user_config_dir_from_xdg() {
    let fx = Fixture::new();
    let user_dir = fx.root().join("config").join("locale-kit");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.yaml"), "locales_dir: Locales\nfallback_locale: es\n").unwrap();

    fx.cmd().args(["get", "hello"]).assert().success().stdout("Hola\n");
}

#[test]
fn test_debug_logs_to_stderr() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--debug", "--culture", "en", "get", "hello"])
        .assert()
        .success()
        .stdout("Hello\n")
        .stderr(predicate::str::contains("loaded locale 'en'"))
        .stderr(predicate::str::contains("[locale-kit]").not());
}

#[test]
fn test_completion() {
    locale_kit_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locale-kit"));
}
