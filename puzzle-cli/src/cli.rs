//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "puzzles", about = "Run registered puzzle solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/dayDD.txt` input files
    #[arg(short, long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read `{year}/dayDD_example.txt` instead of the real input
    #[arg(short, long)]
    pub example: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["puzzles"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert!(!args.example);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_filters_and_flags() {
        let args = Args::try_parse_from([
            "puzzles", "-y", "2024", "-d", "11", "-p", "2", "--tags", "memo,recursion", "-vv",
            "--example",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(11));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["memo", "recursion"]);
        assert_eq!(args.verbose, 2);
        assert!(args.example);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["puzzles", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["puzzles", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["puzzles", "--part", "3"]).is_err());
    }
}
