//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::inputs::InputKind;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    /// Input directory, `~` expanded
    pub input_dir: PathBuf,
    /// Real puzzle input or the example
    pub input_kind: InputKind,
    /// Quiet mode
    pub quiet: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_kind: if args.example {
                InputKind::Example
            } else {
                InputKind::Puzzle
            },
            quiet: args.quiet,
            verbosity: args.verbose,
        }
    }

    /// Default log filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
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
    use clap::Parser;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/in")), PathBuf::from("/tmp/in"));
        assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        }
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["puzzles", "--example", "-q", "-vvvv"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.input_kind, InputKind::Example);
        assert!(config.quiet);
        assert_eq!(config.log_level(), "trace");

        let config = Config::from_args(Args::try_parse_from(["puzzles"]).unwrap());
        assert_eq!(config.input_kind, InputKind::Puzzle);
        assert_eq!(config.log_level(), "warn");
    }
}
