use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bikeshare, no_config, setup_data_dir, temp_dir};

use bikeshare::core::session::{GREETING, RESTART_QUESTION};
use bikeshare::ui::prompt::MONTH_REJECTION;

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

#[test]
fn test_stats_command_chicago() {
    let dir = setup_data_dir("cli_stats_chicago");
    let data = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data])
        .args(["stats", "--city", "Chicago"])
        .assert()
        .success()
        .stdout(contains("Most common month: January"))
        .stdout(contains("Most commonly used start station: Canal St & Adams St"))
        .stdout(contains("0 days, 3 hours, 6 minutes, 0 seconds"))
        .stdout(contains("Most common: 1990"));
}

#[test]
fn test_stats_command_filters_and_raw_rows() {
    let dir = setup_data_dir("cli_stats_filters");
    let data = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data])
        .args([
            "stats",
            "--city",
            "new york city",
            "--month",
            "june",
            "--day",
            "sunday",
            "--raw",
            "5",
        ])
        .assert()
        .success()
        .stdout(contains("Trips:"))
        .stdout(contains("Most common day of the week: Sunday"))
        .stdout(contains("Streeter Dr & Grand Ave to Canal St & Adams St"))
        .stdout(contains("2017-06-25 12:00:00"))
        .stdout(contains("2017-06-21 08:00:00").not());
}

#[test]
fn test_stats_command_without_demographics() {
    let dir = setup_data_dir("cli_stats_washington");
    let data = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data])
        .args(["stats", "--city", "washington"])
        .assert()
        .success()
        .stdout(contains("no data available for selected city"));
}

#[test]
fn test_stats_command_rejects_july() {
    let dir = setup_data_dir("cli_stats_july");
    let data = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data])
        .args(["stats", "--city", "chicago", "--month", "july"])
        .assert()
        .failure()
        .stderr(contains("july"));
}

#[test]
fn test_missing_data_file_is_fatal() {
    let dir = temp_dir("cli_missing_file");
    let data = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data])
        .args(["stats", "--city", "chicago"])
        .assert()
        .code(1)
        .stderr(contains("Data file not found"));
}

#[test]
fn test_explore_session_single_cycle() {
    let dir = setup_data_dir("cli_explore_single");
    let data = dir.to_string_lossy().to_string();

    let assert = bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data, "explore"])
        .write_stdin("Chicago\njuly\nJanuary\nall\nyes\nno\nno\n")
        .assert()
        .success();

    let out = stdout_of(&assert);
    assert_eq!(out.matches(MONTH_REJECTION).count(), 1);
    assert!(out.contains("Most common month: January"));
    assert!(out.contains("Rows 1-2 of 2"));
    assert!(out.contains(RESTART_QUESTION.trim()));
    assert_eq!(out.matches(GREETING).count(), 1);
}

#[test]
fn test_explore_session_restart() {
    let dir = setup_data_dir("cli_explore_restart");
    let data = dir.to_string_lossy().to_string();

    // no subcommand: explore is the default
    let assert = bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data])
        .write_stdin("chicago\nall\nall\nno\nYES\nwashington\nall\nall\nno\nno\n")
        .assert()
        .success();

    let out = stdout_of(&assert);
    assert_eq!(out.matches(GREETING).count(), 2);
    assert!(out.contains("city=Chicago"));
    assert!(out.contains("city=Washington"));
}

#[test]
fn test_explore_session_ends_on_closed_input() {
    let dir = setup_data_dir("cli_explore_eof");
    let data = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &no_config(&dir), "--data-dir", &data, "explore"])
        .write_stdin("chicago\n")
        .assert()
        .success()
        .stdout(contains(GREETING));
}

#[test]
fn test_config_file_is_used() {
    let dir = setup_data_dir("cli_config_file");
    std::fs::rename(dir.join("chicago.csv"), dir.join("chi.csv")).expect("rename");

    let conf = dir.join("bikeshare.conf");
    let yaml = format!(
        "data_dir: {}\npage_size: 2\ncities:\n  chicago: chi.csv\n",
        dir.to_string_lossy()
    );
    std::fs::write(&conf, yaml).expect("write config");
    let conf = conf.to_string_lossy().to_string();

    let assert = bikeshare()
        .args(["--config", &conf, "explore"])
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success();

    let out = stdout_of(&assert);
    assert!(out.contains("Would you like to view 2 rows of data?"));
    assert!(out.contains("Rows 1-2 of 5"));
}

#[test]
fn test_config_init_and_print() {
    let dir = temp_dir("cli_config_init");
    let conf = dir.join("bikeshare.conf").to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &conf, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    bikeshare()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("page_size: 5"))
        .stdout(contains("new_york_city.csv"));

    // a second init without --force refuses to overwrite
    bikeshare()
        .args(["--config", &conf, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_config_city_keys_ignore_case() {
    let dir = setup_data_dir("cli_config_city_case");
    std::fs::rename(dir.join("washington.csv"), dir.join("dc.csv")).expect("rename");
    std::fs::remove_file(dir.join("chicago.csv")).expect("remove chicago.csv");

    let conf = dir.join("bikeshare.conf");
    let yaml = format!(
        "data_dir: {}\ncities:\n  Chicago: dc.csv\n  \"New York City\": new_york_city.csv\n",
        dir.to_string_lossy()
    );
    std::fs::write(&conf, yaml).expect("write config");

    let cfg = bikeshare::config::Config::load(Some(&conf)).expect("load config");
    assert!(cfg.city_file(bikeshare::models::City::Chicago).ends_with("dc.csv"));
    assert!(cfg.cities.contains_key("chicago"));
    assert!(!cfg.cities.contains_key("Chicago"));

    let conf = conf.to_string_lossy().to_string();
    bikeshare()
        .args(["--config", &conf, "stats", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains("Lincoln Memorial"));
}

#[test]
fn test_config_duplicate_city_keys_rejected() {
    let dir = temp_dir("cli_config_city_dup");
    let conf = dir.join("bikeshare.conf");
    std::fs::write(&conf, "cities:\n  chicago: a.csv\n  CHICAGO: b.csv\n").expect("write config");
    let conf = conf.to_string_lossy().to_string();

    bikeshare()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .code(1)
        .stderr(contains("more than once"));
}
