use calc_ui::{config::CalcConfig, headless::run_keys};
use pretty_assertions::assert_eq;

#[test]
fn test_run_keys_with_canonical_tokens() {
    assert_eq!(run_keys("3 + 4 + 5 ="), "12");
    assert_eq!(run_keys("2 ^ 1 0 ="), "1024");
    assert_eq!(run_keys("3 nthRoot 2 7 ="), "3");
}

#[test]
fn test_run_keys_with_keypad_labels() {
    assert_eq!(run_keys("5 ÷ 0 ="), "0");
    assert_eq!(run_keys("0 − 1 6 = √"), "Error");
    assert_eq!(run_keys("1 2 3 ⌫"), "12");
}

#[test]
fn test_run_keys_ignores_unknown_keys_and_extra_whitespace() {
    assert_eq!(run_keys("  7   %  8\t= "), "78");
}

#[test]
fn test_run_keys_empty_input_shows_zero() {
    assert_eq!(run_keys(""), "0");
}

#[test]
fn test_config_sample_parses() {
    let sample = r#"
        [window]
        width = 360.0

        [logging]
        level = "calc_core=debug,info"
    "#;

    let config = CalcConfig::from_toml_str(sample).expect("sample config should parse");

    assert_eq!(config.window.width, 360.0);
    assert_eq!(config.logging.level, "calc_core=debug,info");
    assert!(config.logging.stdout);
}
