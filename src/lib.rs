//! # leetdict
//!
//! Leetspeak password dictionary generator for penetration testing.
//!
//! ## Features
//!
//! - **Combinations**: every non-empty subset of the seed words, in order
//! - **Permutations**: optionally every ordering of each combination
//! - **Leetspeak**: every case and look-alike spelling of every letter
//! - **Rank windows**: jump straight to any slice of the output with `--start`/`--end`
//! - **Exact counts**: closed-form totals without generating anything
//! - **Length filtering**: bound the length of the generated candidates
//!
//! ## Usage
//!
//! ```bash
//! # All combinations and spellings of two words
//! leetdict acme admin
//!
//! # With orderings, 8 to 12 characters, second million candidates only
//! leetdict -p -m 8 -M 12 --start 1000000 --end 2000000 acme admin 2024
//! ```
//!
//! ## Example
//!
//! ```rust
//! use leetdict::{Generator, LengthFilter};
//!
//! let generator = Generator::new(["b", "c"], true, LengthFilter::default());
//! assert_eq!(generator.possibilities().unwrap(), 12);
//!
//! let window: Vec<String> = generator.candidates(8, Some(12)).unwrap().collect();
//! assert_eq!(window, ["cb", "cB", "Cb", "CB"]);
//! ```

pub mod cli;
pub mod combinatorics;
pub mod counting;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod generator;
pub mod indexer;
pub mod leet;
pub mod output;
pub mod progress;
pub mod variants;
pub mod words;

pub use cli::Args;
pub use error::{LeetError, Result};
pub use filter::LengthFilter;
pub use generator::{enumerate, Candidates, Generator, GeneratorConfig, RunState, Window};
pub use words::WordSet;
