use super::template::generate_config;
use super::*;

#[test]
fn default_config_has_expected_values() {
    // Act
    let config = Config::default();

    // Assert
    assert_eq!(config.run.key, DEFAULT_RUN_KEY);
    assert!(config.startup.folder.is_none());
    assert!(!config.startup.keep_unmanaged_files);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml = "[startup]\nkeep_unmanaged_files = true\n";

    // Act
    let config = loader::parse(toml).unwrap();

    // Assert
    assert!(config.startup.keep_unmanaged_files);
    assert_eq!(config.run.key, DEFAULT_RUN_KEY);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn blank_run_key_falls_back_to_default() {
    // Arrange
    let toml = "[run]\nkey = '   '\n";

    // Act
    let config = loader::parse(toml).unwrap();

    // Assert
    assert_eq!(config.run.key, DEFAULT_RUN_KEY);
}

#[test]
fn run_key_is_trimmed_of_backslashes() {
    // Arrange
    let toml = "[run]\nkey = '\\Software\\Test\\Run\\'\n";

    // Act
    let config = loader::parse(toml).unwrap();

    // Assert
    assert_eq!(config.run.key, r"Software\Test\Run");
}

#[test]
fn empty_folder_override_is_ignored() {
    // Arrange
    let toml = "[startup]\nfolder = ''\n";

    // Act
    let config = loader::parse(toml).unwrap();

    // Assert
    assert!(config.startup.folder.is_none());
}

#[test]
fn log_size_is_clamped() {
    // Arrange
    let mut config = Config::default();
    config.logging.max_file_mb = 0;

    // Act
    config.validate();

    // Assert
    assert_eq!(config.logging.max_file_mb, 1);
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(loader::parse("[run\nkey = 1").is_err());
}

#[test]
fn generated_template_parses_to_defaults() {
    // Act
    let config = loader::parse(&generate_config()).unwrap();

    // Assert
    assert_eq!(config.run.key, DEFAULT_RUN_KEY);
    assert!(config.startup.folder.is_none());
    assert!(!config.startup.keep_unmanaged_files);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.max_file_mb, 10);
}
