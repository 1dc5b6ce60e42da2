pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "board-export", version)]
#[command(about = "Convert a board JSON export into a tree of markdown files")]
pub struct CliConfig {
    /// Path to the board JSON export file
    pub json_file: PathBuf,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.json_file
    }

    /// Relative to the working directory, so paths print as `Board_markdown/...`.
    fn output_base(&self) -> &Path {
        Path::new("")
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("json_file", &self.json_file.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_positional_argument() {
        let config = CliConfig::try_parse_from(["board-export", "board.json"]).unwrap();
        assert_eq!(config.input_path(), Path::new("board.json"));
        assert_eq!(config.output_base(), Path::new(""));
        assert_eq!(
            config.output_base().join("Board_markdown").join("To Do"),
            PathBuf::from("Board_markdown/To Do")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_requires_input_file() {
        assert!(CliConfig::try_parse_from(["board-export"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(CliConfig::try_parse_from(["board-export", "--verbose", "board.json"]).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = CliConfig {
            json_file: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
