//! Binary smoke tests: argument surface and config failure paths.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn telegram_help_mentions_config_flag() {
    Command::cargo_bin("thoughtbot-telegram")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn discord_help_mentions_config_flag() {
    Command::cargo_bin("thoughtbot-discord")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn missing_config_file_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("thoughtbot-telegram")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("does-not-exist.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn malformed_config_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thoughtbot.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[node").unwrap();

    Command::cargo_bin("thoughtbot-discord")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn telegram_requires_a_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thoughtbot.toml");
    std::fs::write(&path, "[node]\ncli_path = \"thought-cli\"\n").unwrap();

    Command::cargo_bin("thoughtbot-telegram")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .env_remove("TELEGRAM_BOT_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("telegram.token"));
}

#[test]
fn discord_requires_token_and_guild() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thoughtbot.toml");
    std::fs::write(&path, "[discord]\ntoken = \"dc-token\"\n").unwrap();

    Command::cargo_bin("thoughtbot-discord")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .env_remove("DISCORD_BOT_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("discord.guild_id"));
}
