//! Configuration resolution from CLI args

use crate::cli::{Args, Demo};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Which demo to run, with its resolved options
#[derive(Debug, PartialEq, Eq)]
pub enum DemoConfig {
    Vehicles,
    /// `input` is `None` when commands come from standard input
    Library { input: Option<PathBuf> },
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Demo to run
    pub demo: DemoConfig,
    /// Fallback filter directive when RUST_LOG is unset
    pub log_filter: String,
    /// Whether log lines carry timestamps
    pub timestamps: bool,
}

impl Config {
    /// Build config from CLI args, expanding and checking the input path
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let demo = match args.demo {
            Demo::Vehicles => DemoConfig::Vehicles,
            Demo::Library { input } => DemoConfig::Library {
                input: input.map(|p| resolve_input(&p)).transpose()?,
            },
        };

        Ok(Config {
            demo,
            log_filter: args.log_level.as_directive().to_string(),
            timestamps: args.timestamps,
        })
    }
}

/// Expand `~` and make sure the script file exists
fn resolve_input(path: &Path) -> Result<PathBuf, CliError> {
    let path = expand_tilde(path);
    if !path.is_file() {
        return Err(CliError::Config(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    Ok(path)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LogLevel;
    use tempfile::NamedTempFile;

    fn args(demo: Demo) -> Args {
        Args {
            log_level: LogLevel::Warn,
            timestamps: true,
            demo,
        }
    }

    #[test]
    fn test_vehicles_config() {
        let config = Config::from_args(args(Demo::Vehicles)).unwrap();
        assert_eq!(config.demo, DemoConfig::Vehicles);
        assert_eq!(config.log_filter, "warn");
        assert!(config.timestamps);
    }

    #[test]
    fn test_existing_input_file_accepted() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::from_args(args(Demo::Library {
            input: Some(file.path().to_path_buf()),
        }))
        .unwrap();

        assert_eq!(
            config.demo,
            DemoConfig::Library {
                input: Some(file.path().to_path_buf())
            }
        );
    }

    #[test]
    fn test_missing_input_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let result = Config::from_args(args(Demo::Library {
            input: Some(missing),
        }));

        assert!(matches!(result, Err(CliError::Config(ref msg)) if msg.contains("nope.txt")));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("a/b.txt")), PathBuf::from("a/b.txt"));
        assert_eq!(expand_tilde(Path::new("/abs/~x")), PathBuf::from("/abs/~x"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/cmds.txt")), home.join("cmds.txt"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
