//! Integration tests for TOML layering and environment overrides.
//!
//! Uses `figment::Jail` so every test runs in an isolated temporary directory
//! with a scrubbed environment.

use figment::Jail;
use mrd_config::MeridianConfig;
use std::path::PathBuf;

#[test]
fn project_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".meridian")?;
        jail.create_file(
            ".meridian/config.toml",
            r#"
            [general]
            pretty = false

            [export]
            dir = "out/schemas"
            "#,
        )?;

        let config: MeridianConfig = MeridianConfig::figment().extract()?;
        assert!(!config.general.pretty);
        assert_eq!(config.export.dir, PathBuf::from("out/schemas"));
        // Unset keys keep their defaults.
        assert!(config.export.include_entities);
        Ok(())
    });
}

#[test]
fn env_overrides_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".meridian")?;
        jail.create_file(
            ".meridian/config.toml",
            r#"
            [export]
            dir = "from_toml"
            "#,
        )?;
        jail.set_env("MERIDIAN_EXPORT__DIR", "from_env");

        let config: MeridianConfig = MeridianConfig::figment().extract()?;
        assert_eq!(config.export.dir, PathBuf::from("from_env"));
        Ok(())
    });
}

#[test]
fn env_sets_nested_general_values() {
    Jail::expect_with(|jail| {
        jail.set_env("MERIDIAN_GENERAL__PRETTY", "false");
        jail.set_env("MERIDIAN_GENERAL__DEFAULT_MODEL", "patient");

        let config: MeridianConfig = MeridianConfig::figment().extract()?;
        assert!(!config.general.pretty);
        assert_eq!(config.general.default_model, "patient");
        Ok(())
    });
}

#[test]
fn missing_files_fall_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config: MeridianConfig = MeridianConfig::figment().extract()?;
        assert!(config.general.pretty);
        assert_eq!(config.export.dir, PathBuf::from("schemas"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".meridian")?;
        jail.create_file(".meridian/config.toml", "not = [valid")?;

        let result: Result<MeridianConfig, _> = MeridianConfig::figment().extract();
        assert!(result.is_err());
        Ok(())
    });
}
