//! This module provides the `ConfigLoader` struct, responsible for loading machine
//! configurations from files and strings.

use crate::parser::{parse, Config};
use crate::types::{TuringMachineError, MAX_CONFIG_SIZE};
use std::fs;
use std::path::Path;

/// `ConfigLoader` is a utility struct for loading machine configurations.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a configuration from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the configuration file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` if the file is successfully read. Malformed lines are reported in
    ///   `Config::diagnostics` rather than as an error.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read or exceeds
    ///   `MAX_CONFIG_SIZE`.
    pub fn load_config(path: &Path) -> Result<Config, TuringMachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_config_from_string(&content).map_err(|e| match e {
            TuringMachineError::FileError(msg) => {
                TuringMachineError::FileError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Loads a configuration from the provided string content.
    ///
    /// # Arguments
    ///
    /// * `content` - A string slice containing the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` with the parsed configuration.
    /// * `Err(TuringMachineError::FileError)` if the content exceeds `MAX_CONFIG_SIZE`.
    pub fn load_config_from_string(content: &str) -> Result<Config, TuringMachineError> {
        if content.len() > MAX_CONFIG_SIZE {
            return Err(TuringMachineError::FileError(format!(
                "Configuration is {} bytes, the limit is {} bytes",
                content.len(),
                MAX_CONFIG_SIZE
            )));
        }

        let config = parse(content);
        tracing::debug!(
            rules = config.rules.len(),
            final_states = config.final_states.len(),
            skipped = config.diagnostics.len(),
            "configuration loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::run;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_config() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("machine.txt");

        let content = "# test\nFinalState: q1\nTransitions:\nq0 0 q1 0 R\n";

        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = ConfigLoader::load_config(&file_path);
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.final_states, vec!["q1"]);
        assert_eq!(config.rules.len(), 1);

        let table = config.table().unwrap();
        assert!(run(&table, "0"));
        assert!(!run(&table, "1"));
    }

    #[test]
    fn test_load_config_with_malformed_lines() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"Transitions:\nq0 0 q1\nq0 0 q1 0 R\n").unwrap();

        let config = ConfigLoader::load_config(&file_path).unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.diagnostics.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.txt");

        let result = ConfigLoader::load_config(&file_path);
        assert!(matches!(result, Err(TuringMachineError::FileError(_))));
        assert!(result.unwrap_err().to_string().contains("missing.txt"));
    }

    #[test]
    fn test_load_oversized_config() {
        let content = "#".repeat(MAX_CONFIG_SIZE + 1);

        let result = ConfigLoader::load_config_from_string(&content);
        assert!(matches!(result, Err(TuringMachineError::FileError(_))));
    }
}
