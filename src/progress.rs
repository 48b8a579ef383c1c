//! Progress display module
//!
//! Styled status lines, progress bar and run statistics. Everything here goes
//! to stderr, since stdout carries the candidates.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║   ██╗     ███████╗███████╗████████╗██████╗ ██╗ ██████╗████████╗              ║
║   ██║     ██╔════╝██╔════╝╚══██╔══╝██╔══██╗██║██╔════╝╚══██╔══╝              ║
║   ██║     █████╗  █████╗     ██║   ██║  ██║██║██║        ██║                 ║
║   ██║     ██╔══╝  ██╔══╝     ██║   ██║  ██║██║██║        ██║                 ║
║   ███████╗███████╗███████╗   ██║   ██████╔╝██║╚██████╗   ██║                 ║
║   ╚══════╝╚══════╝╚══════╝   ╚═╝   ╚═════╝ ╚═╝ ╚═════╝   ╚═╝                 ║
║                                                                              ║
║                  Leetspeak Password Dictionary Generator                      ║
║                         For Penetration Testing                               ║
║                                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════════════════════╝
"#;

    eprintln!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled progress bar on stderr
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {human_pos}/{human_len} ({per_sec}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Generation statistics
#[derive(Debug)]
pub struct GenerationStats {
    emitted: u64,
    duplicates: u64,
    bytes_written: u64,
    dedup_memory: usize,
    start_time: Instant,
}

impl GenerationStats {
    pub fn new() -> Self {
        Self {
            emitted: 0,
            duplicates: 0,
            bytes_written: 0,
            dedup_memory: 0,
            start_time: Instant::now(),
        }
    }

    /// Record what the output sink actually received
    pub fn set_written(&mut self, lines: u64, bytes: u64) {
        self.emitted = lines;
        self.bytes_written = bytes;
    }

    pub fn add_duplicate(&mut self) {
        self.duplicates += 1;
    }

    pub fn set_dedup_memory(&mut self, bytes: usize) {
        self.dedup_memory = bytes;
    }

    pub fn get_emitted(&self) -> u64 {
        self.emitted
    }

    pub fn get_duplicates(&self) -> u64 {
        self.duplicates
    }

    pub fn get_bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn get_dedup_memory(&self) -> usize {
        self.dedup_memory
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn candidates_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.get_emitted() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self, start: u128, end: u128, cancelled: bool) {
        let title = if cancelled {
            "                  GENERATION STOPPED EARLY"
        } else {
            "                    GENERATION COMPLETE"
        };

        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", title.green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} [{}, {})", "Window:         ".green(),
            format_number(start), format_number(end));
        eprintln!("  {} {}", "Candidates:     ".green().bold(),
            format_number(self.get_emitted()).green().bold());

        let duplicates = self.get_duplicates();
        if duplicates > 0 {
            eprintln!("  {} {}", "Duplicates:     ".yellow(),
                format_number(duplicates));
        }

        eprintln!("  {} {}", "Data written:   ".green(),
            ByteSize(self.get_bytes_written()));
        if self.dedup_memory > 0 {
            eprintln!("  {} {}", "Dedup memory:   ".green(),
                ByteSize(self.dedup_memory as u64));
        }
        eprintln!();
        eprintln!("  {} {}", "Duration:       ".green(),
            format_duration(self.elapsed()));
        eprintln!("  {} {:.2} candidates/sec", "Throughput:     ".green(),
            self.candidates_per_second());
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: impl Into<u128>) -> String {
    let s = n.into().to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
