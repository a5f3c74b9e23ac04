use super::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert!(config.keyboard.haptic_feedback);
    assert!(!config.keyboard.minimalist_mode);
    assert_eq!(config.keyboard.theme, ThemeMode::FollowSystem);
    assert_eq!(config.timing.long_press_ms, 500);
    assert_eq!(config.timing.key_repeat_ms, 50);
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[keyboard]
minimalist_mode = true
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert!(config.keyboard.minimalist_mode);
    // Untouched fields keep their defaults
    assert!(config.keyboard.haptic_feedback);
    assert_eq!(config.timing.long_press_ms, 500);
}

#[test]
fn theme_modes_parse_from_kebab_case() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[keyboard]
theme = "dark"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.keyboard.theme, ThemeMode::Dark);
}

#[test]
fn out_of_range_timings_are_clamped() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[timing]
long_press_ms = 9000
key_repeat_ms = 1
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timing.long_press_ms, 2000);
    assert_eq!(config.timing.key_repeat_ms, 10);
}

#[test]
fn invalid_toml_is_an_error_from_load_from() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "keyboard = not toml at all [");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn theme_mode_cli_parsing() {
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("DARK"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("follow-system"), Some(ThemeMode::FollowSystem));
    assert_eq!(ThemeMode::parse("system"), Some(ThemeMode::FollowSystem));
    assert_eq!(ThemeMode::parse("sepia"), None);
}

#[test]
fn duration_accessors_convert_milliseconds() {
    let timing = TimingConfig::default();
    assert_eq!(timing.long_press().as_millis(), 500);
    assert_eq!(timing.key_repeat().as_millis(), 50);
}
