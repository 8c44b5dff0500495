use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use display_app::DisplayConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const OVERRIDES: [&str; 5] = [
    "METER_DISPLAY_CONFIG",
    "METER_DISPLAY_SNAPSHOT",
    "METER_DISPLAY_REFRESH_MS",
    "METER_DISPLAY_REJECT_OUT_OF_ORDER",
    "METER_DISPLAY_HISTORY_LIMIT",
];

fn clear_env() {
    for key in OVERRIDES {
        env::remove_var(key);
    }
}

#[test]
fn defaults_validate() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();

    let config = DisplayConfig::load().expect("load config");
    assert_eq!(config, DisplayConfig::default());
    assert_eq!(config.snapshot_path, "meters.json");
    assert!(config.reject_out_of_order);
    assert!(config.refresh_interval().is_none());
    config.validate().expect("validate config");
}

#[test]
fn toml_config_validates() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();
    env::set_var("METER_DISPLAY_CONFIG", fixture_path("config-valid.toml"));

    let config = DisplayConfig::load().expect("load config");
    config.validate().expect("validate config");
    assert_eq!(config.snapshot_path, "/var/lib/meter-display/meters.json");
    assert_eq!(config.refresh_interval_ms, Some(5000));
    assert!(!config.reject_out_of_order);
    assert_eq!(config.history_limit, Some(14));

    clear_env();
}

#[test]
fn json_config_validates() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();
    env::set_var("METER_DISPLAY_CONFIG", fixture_path("config-valid.json"));

    let config = DisplayConfig::load().expect("load config");
    config.validate().expect("validate config");
    assert_eq!(config.history_limit, Some(7));
    assert!(config.reject_out_of_order);

    clear_env();
}

#[test]
fn explicit_path_wins_over_env_path() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();
    env::set_var("METER_DISPLAY_CONFIG", fixture_path("config-invalid.toml"));

    let config = DisplayConfig::load_with_path(Some(fixture_path("config-valid.json")))
        .expect("load config");
    config.validate().expect("validate config");

    clear_env();
}

#[test]
fn env_overrides_file_values() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();
    env::set_var("METER_DISPLAY_CONFIG", fixture_path("config-valid.toml"));
    env::set_var("METER_DISPLAY_SNAPSHOT", "/tmp/other.json");
    env::set_var("METER_DISPLAY_REFRESH_MS", "250");
    env::set_var("METER_DISPLAY_REJECT_OUT_OF_ORDER", "true");
    env::set_var("METER_DISPLAY_HISTORY_LIMIT", "not-a-number");

    let config = DisplayConfig::load().expect("load config");
    assert_eq!(config.snapshot_path, "/tmp/other.json");
    assert_eq!(config.refresh_interval_ms, Some(250));
    assert!(config.reject_out_of_order);
    assert_eq!(config.history_limit, Some(14));

    clear_env();
}

#[test]
fn invalid_config_fails_validation() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();
    env::set_var("METER_DISPLAY_CONFIG", fixture_path("config-invalid.toml"));

    let config = DisplayConfig::load().expect("load config");
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
fn missing_config_file_is_an_error() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    clear_env();

    assert!(DisplayConfig::load_with_path(Some(fixture_path("absent.toml"))).is_err());
}

fn fixture_path(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().to_string()
}
