use std::time::Duration;

use serial_test::serial;
use sockbridge_gate::GateConfig;

fn clear_env() {
    unsafe {
        std::env::remove_var("SOCKBRIDGE_RESOLVE_TIMEOUT");
        std::env::remove_var("SOCKBRIDGE_NO_TIMEOUT");
        std::env::remove_var("SOCKBRIDGE_ALLOW_ON_TIMEOUT");
    }
}

#[test]
#[serial]
fn default_deadline_applies() {
    clear_env();
    let config = GateConfig::default();
    assert_eq!(
        config.resolve_timeout,
        Some(GateConfig::DEFAULT_RESOLVE_TIMEOUT)
    );
    assert!(!config.allow_on_timeout);
}

#[test]
#[serial]
fn resolve_timeout_parses_humantime() {
    clear_env();
    unsafe {
        std::env::set_var("SOCKBRIDGE_RESOLVE_TIMEOUT", "2s 500ms");
    }
    let config = GateConfig::default();
    assert_eq!(config.resolve_timeout, Some(Duration::from_millis(2_500)));
    clear_env();
}

#[test]
#[serial]
fn unparseable_timeout_falls_back_to_default() {
    clear_env();
    unsafe {
        std::env::set_var("SOCKBRIDGE_RESOLVE_TIMEOUT", "soon");
    }
    let config = GateConfig::default();
    assert_eq!(
        config.resolve_timeout,
        Some(GateConfig::DEFAULT_RESOLVE_TIMEOUT)
    );
    clear_env();
}

#[test]
#[serial]
fn no_timeout_flag_wins_over_explicit_deadline() {
    clear_env();
    unsafe {
        std::env::set_var("SOCKBRIDGE_RESOLVE_TIMEOUT", "10s");
        std::env::set_var("SOCKBRIDGE_NO_TIMEOUT", "true");
    }
    let config = GateConfig::default();
    assert_eq!(config.resolve_timeout, None);
    clear_env();
}

#[test]
#[serial]
fn allow_on_timeout_flag_flips_the_fallback() {
    clear_env();
    unsafe {
        std::env::set_var("SOCKBRIDGE_ALLOW_ON_TIMEOUT", "1");
    }
    let config = GateConfig::default();
    assert!(config.allow_on_timeout);
    clear_env();
}
