//! End-to-end menu scenarios with scripted key presses.

use hashcode::config::ContactConfig;
use hashcode::{DemoConfig, HashCode};
use hashcode_cli::menu::MENU_LINES;
use hashcode_cli::{
    load_config, CliError, Key, ManualContact, MenuController, MenuState, ScriptedKeys,
};

fn quiet_config() -> DemoConfig {
    DemoConfig::new()
        .with_clear_screen(false)
        .with_pause_after_demo(false)
}

fn run(keys: ScriptedKeys, config: DemoConfig) -> (Result<(), CliError>, MenuState, String) {
    let mut controller = MenuController::new(keys, Vec::new(), config);
    let result = controller.run();
    let state = controller.state();
    let (_, out) = controller.into_parts();
    (result, state, String::from_utf8(out).unwrap())
}

fn result_lines(out: &str) -> Vec<&str> {
    out.lines().filter(|l| l.starts_with("HashCode of ")).collect()
}

#[test]
fn scenario_a_manual_equal_contacts() {
    let (result, _, out) = run(ScriptedKeys::from_chars("1x"), quiet_config());
    assert!(result.is_ok());

    let expected = ManualContact::new("Gerhard", 64).hash_code();
    assert_eq!(
        result_lines(&out),
        vec![format!(
            "HashCode of ManualContact = {expected} and ManualContact = {expected} are equal."
        )]
    );
}

#[test]
fn scenario_b_different_names_print_nothing() {
    let config = quiet_config().with_contacts(
        ContactConfig::new("Gerhard", 64),
        ContactConfig::new("Gerda", 64),
    );
    let (result, _, out) = run(ScriptedKeys::from_chars("123x"), config);

    assert!(result.is_ok());
    assert!(result_lines(&out).is_empty());
}

#[test]
fn scenario_c_exit_key_ends_cleanly() {
    let (result, state, out) = run(ScriptedKeys::from_chars("x"), quiet_config());

    assert!(result.is_ok());
    assert_eq!(state, MenuState::Exiting);
    assert_eq!(out.lines().collect::<Vec<_>>(), MENU_LINES.to_vec());
}

#[test]
fn every_strategy_reports_equal_contacts() {
    let (result, _, out) = run(ScriptedKeys::from_chars("123X"), quiet_config());
    assert!(result.is_ok());

    let lines = result_lines(&out);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ManualContact"));
    assert!(lines[1].contains("ReflectiveContact"));
    assert!(lines[2].contains("SelectorContact"));
}

#[test]
fn non_character_keys_are_ignored() {
    let keys = ScriptedKeys::new([Key::Other, Key::Char('1'), Key::Other, Key::Interrupt]);
    let (result, state, out) = run(keys, quiet_config());

    assert!(result.is_ok());
    assert_eq!(state, MenuState::Exiting);
    assert_eq!(result_lines(&out).len(), 1);
}

#[test]
fn load_config_missing_explicit_path_fails() {
    let err = load_config(Some(std::path::Path::new("no/such/hashcode.toml"))).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
