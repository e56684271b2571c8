// Integration tests for the legacy environment defaults

use ols_config::infrastructure::config::legacy::DEFAULT_COMPLETION_MODEL;
use ols_config::LegacySettings;
use std::path::PathBuf;

#[test]
fn test_from_env_defaults() {
    temp_env::with_vars_unset(
        ["OLS_LOGFILE", "OLS_ENABLE_UI", "BASE_COMPLETION_MODEL"],
        || {
            let settings = LegacySettings::from_env();
            assert!(settings.logfile.is_none());
            assert!(settings.enable_ui);
            assert_eq!(settings.base_completion_model, DEFAULT_COMPLETION_MODEL);
        },
    );
}

#[test]
fn test_from_env_overrides() {
    temp_env::with_vars(
        [
            ("OLS_LOGFILE", Some("/var/log/ols/ols.log")),
            ("OLS_ENABLE_UI", Some("False")),
            ("BASE_COMPLETION_MODEL", Some("ibm/granite-13b-chat-v2")),
        ],
        || {
            let settings = LegacySettings::from_env();
            assert_eq!(settings.logfile, Some(PathBuf::from("/var/log/ols/ols.log")));
            assert!(!settings.enable_ui);
            assert_eq!(settings.base_completion_model, "ibm/granite-13b-chat-v2");
        },
    );
}

#[test]
fn test_from_env_enable_ui_mixed_case() {
    temp_env::with_var("OLS_ENABLE_UI", Some("True"), || {
        assert!(LegacySettings::from_env().enable_ui);
    });
}
