//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Most verbose level that still gets printed
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    /// Demo output only (default)
    #[default]
    Info,
    /// Also show command dispatch and factory lookups
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Design pattern demo runner
#[derive(Parser, Debug)]
#[command(name = "patterns", about = "Run the design pattern demos", version)]
pub struct Args {
    /// Log level (RUST_LOG overrides this when set)
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Prefix log lines with timestamps
    #[arg(long, global = true)]
    pub timestamps: bool,

    #[command(subcommand)]
    pub demo: Demo,
}

/// The two demo programs
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Demo {
    /// Build and start one car and one motorcycle per regional factory
    Vehicles,

    /// Interactive library catalog (add, remove, show, exit)
    Library {
        /// Read commands from a file instead of standard input
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["patterns", "vehicles"]).unwrap();
        assert_eq!(args.demo, Demo::Vehicles);
        assert_eq!(args.log_level, LogLevel::Info);
        assert!(!args.timestamps);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "patterns",
            "library",
            "--input",
            "commands.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(
            args.demo,
            Demo::Library {
                input: Some(PathBuf::from("commands.txt"))
            }
        );
        assert_eq!(args.log_level.as_directive(), "debug");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["patterns"]).is_err());
    }
}
