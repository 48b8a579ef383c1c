//! Command-line interface definition for leetdict
//!
//! Provides argument parsing and validation for the dictionary generator.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::encoding::read_words;
use crate::filter::{LengthFilter, DEFAULT_MAX_LEN};

/// Leetspeak password dictionary generator for penetration testing
///
/// Builds every combination of the given words, optionally every ordering,
/// and every leetspeak spelling of each. Output is in a fixed order, so any
/// slice of it can be produced directly with --start and --end.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "leetdict",
    author = "m0h1nd4",
    version,
    about = "Leetspeak password dictionary generator for penetration testing",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                              LEETDICT v1.0.0                                 ║
║                  Leetspeak Password Dictionary Generator                      ║
║                         For Penetration Testing                               ║
╚══════════════════════════════════════════════════════════════════════════════╝

Generate every combination of the given words, optionally every ordering of
each combination, and every leetspeak spelling of the result. Output order is
fixed, so a slice of the dictionary can be produced directly by rank.

EXAMPLES:
    # All combinations of two words
    leetdict acme admin

    # Include every ordering of each combination
    leetdict -p acme admin 2024

    # Only candidates between 8 and 12 characters
    leetdict -p -m 8 -M 12 acme admin 2024

    # How many candidates would be generated?
    leetdict -p -n acme admin 2024

    # Split the work: first million, then the next million
    leetdict -p acme admin 2024 --end 1000000
    leetdict -p acme admin 2024 --start 1000000 --end 2000000

    # Seed words from a file, written to disk with progress
    leetdict -w seeds.txt -o dict.txt --stats

SUBSTITUTIONS:
    a -> A 4 @    e -> E 3 €    g -> G 9    i -> I 1 !
    l -> L 1      o -> O 0      s -> S 5 $  t -> T 7 +
    other letters -> lowercase and uppercase
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/leetdict"
)]
pub struct Args {
    /// Words to build candidates from (order matters)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Read additional words from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Enable permutations of words
    #[arg(short, long, default_value_t = false)]
    pub permute: bool,

    /// Print the number of candidates instead of the candidates
    #[arg(short, long, default_value_t = false)]
    pub number: bool,

    /// Do not generate candidates shorter than LEN
    #[arg(short = 'm', long = "min", value_name = "LEN", default_value_t = 0)]
    pub min_len: usize,

    /// Do not generate candidates longer than LEN
    #[arg(short = 'M', long = "max", value_name = "LEN", default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Rank of the first candidate to generate
    #[arg(short, long, value_name = "RANK", default_value_t = 0)]
    pub start: u128,

    /// Rank to stop before (default: total number of candidates)
    #[arg(short, long, value_name = "RANK")]
    pub end: Option<u128>,

    /// Write candidates to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop candidates already emitted in this run
    #[arg(short, long, default_value_t = false)]
    pub unique: bool,

    /// Deduplication strategy for --unique
    #[arg(long, value_enum, default_value_t = DedupStrategy::Memory)]
    pub unique_strategy: DedupStrategy,

    /// Output buffer size (e.g. "64KB", "8MB")
    #[arg(long, value_name = "SIZE", default_value = "8MB")]
    pub buffer_size: String,

    /// Show a summary when done
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Deduplication strategy for --unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DedupStrategy {
    /// In-memory HashSet (exact, memory grows with output)
    Memory,
    /// Bloom filter (fixed memory, may drop a few unique candidates)
    Bloom,
}

impl Args {
    /// Positional words followed by the words of --wordlist
    pub fn collect_words(&self) -> anyhow::Result<Vec<String>> {
        let mut words = self.words.clone();

        if let Some(ref path) = self.wordlist {
            let from_file = read_words(path)?;
            log::debug!("read {} words from {:?}", from_file.len(), path);
            words.extend(from_file);
        }

        if words.is_empty() {
            anyhow::bail!("No words given: pass WORD arguments or --wordlist");
        }

        Ok(words)
    }

    /// Length bounds from --min and --max
    pub fn length_filter(&self) -> anyhow::Result<LengthFilter> {
        LengthFilter::new(self.min_len, self.max_len)
    }

    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = size_str.strip_suffix("GB") {
        (num, 1024 * 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("MB") {
        (num, 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("KB") {
        (num, 1024)
    } else if let Some(num) = size_str.strip_suffix('B') {
        (num, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    Ok(num * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("leetdict").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["acme", "admin"]);

        assert_eq!(args.words, vec!["acme", "admin"]);
        assert!(!args.permute);
        assert_eq!(args.min_len, 0);
        assert_eq!(args.max_len, 32);
        assert_eq!(args.start, 0);
        assert_eq!(args.end, None);
        assert_eq!(args.unique_strategy, DedupStrategy::Memory);
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-p", "-m", "4", "-M", "12", "-s", "10", "-e", "20", "x"]);

        assert!(args.permute);
        assert_eq!(args.length_filter().unwrap(), LengthFilter::new(4, 12).unwrap());
        assert_eq!(args.start, 10);
        assert_eq!(args.end, Some(20));
    }

    #[test]
    fn test_large_ranks() {
        let args = parse(&["--start", "340282366920938463463374607431768211454", "x"]);
        assert_eq!(args.start, u128::MAX - 1);
    }

    #[test]
    fn test_inverted_lengths() {
        let args = parse(&["-m", "9", "-M", "3", "x"]);
        assert!(args.length_filter().is_err());
    }

    #[test]
    fn test_no_words() {
        let args = parse(&["-p"]);
        assert!(args.collect_words().is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64MB").unwrap(), 64 * 1024 * 1024);
        assert_eq!(parse_size("8mb").unwrap(), 8 * 1024 * 1024);
        assert_eq!(parse_size("1024KB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("512").unwrap(), 512);
        assert!(parse_size("lots").is_err());
    }
}
