//! Output management module
//!
//! Buffered sink for candidates, either stdout or a file. Counts only what
//! the underlying sink accepted, so a reader that goes away mid-run gets an
//! exact tally of the lines it actually received.

use indicatif::ProgressBar;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dedup::Deduplicator;
use crate::progress::GenerationStats;

/// Where candidates are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Inner sink wrapper tallying bytes and newlines it passed through
struct Delivered<W: Write> {
    inner: W,
    lines: u64,
    bytes: u64,
}

impl<W: Write> Write for Delivered<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.lines += memchr::memchr_iter(b'\n', &buf[..n]).count() as u64;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Candidate writer with buffering
pub struct CandidateWriter<W: Write = Box<dyn Write>> {
    writer: BufWriter<Delivered<W>>,
    target: OutputTarget,
}

impl CandidateWriter {
    /// Writer over standard output
    pub fn stdout(buffer_size: usize) -> Self {
        Self::new(Box::new(io::stdout()), OutputTarget::Stdout, buffer_size)
    }

    /// Writer over a file, created or truncated
    pub fn file(path: PathBuf, buffer_size: usize) -> anyhow::Result<Self> {
        ensure_parent_dir(&path)?;

        let file: File = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self::new(Box::new(file), OutputTarget::File(path), buffer_size))
    }
}

impl<W: Write> CandidateWriter<W> {
    /// Writer over any sink
    pub fn new(inner: W, target: OutputTarget, buffer_size: usize) -> Self {
        let delivered = Delivered {
            inner,
            lines: 0,
            bytes: 0,
        };
        Self {
            writer: BufWriter::with_capacity(buffer_size, delivered),
            target,
        }
    }

    /// Write one candidate followed by a newline.
    ///
    /// Errors are returned as-is so callers can tell a closed pipe apart.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Flush the buffer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Complete lines that reached the sink; buffered lines are not counted
    pub fn lines_written(&self) -> u64 {
        self.writer.get_ref().lines
    }

    /// Bytes that reached the sink
    pub fn bytes_written(&self) -> u64 {
        self.writer.get_ref().bytes
    }
}

impl<W: Write> Drop for CandidateWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Result of streaming one window into a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Lines the sink received
    pub written: u64,
    /// The reader closed the output before the window was done
    pub cancelled: bool,
}

/// Drain `candidates` into `writer`, dropping repeats through `dedup`.
///
/// A closed pipe ends the run early and is reported through
/// [`WriteOutcome::cancelled`]; any other I/O error is returned. Stats are
/// updated from the writer's delivered counts.
pub fn write_candidates<W, I>(
    candidates: I,
    writer: &mut CandidateWriter<W>,
    dedup: &mut dyn Deduplicator,
    stats: &mut GenerationStats,
    pb: &ProgressBar,
) -> io::Result<WriteOutcome>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut cancelled = false;

    for candidate in candidates {
        pb.inc(1);

        if !dedup.insert(&candidate) {
            stats.add_duplicate();
            continue;
        }

        match writer.write_line(&candidate) {
            Ok(()) => {}
            Err(e) if is_closed_pipe(&e) => {
                cancelled = true;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    if !cancelled {
        match writer.flush() {
            Ok(()) => {}
            Err(e) if is_closed_pipe(&e) => cancelled = true,
            Err(e) => return Err(e),
        }
    }

    stats.set_written(writer.lines_written(), writer.bytes_written());
    stats.set_dedup_memory(dedup.memory_usage());

    Ok(WriteOutcome {
        written: writer.lines_written(),
        cancelled,
    })
}

/// Whether an I/O error means the reader went away
pub fn is_closed_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}

/// Ensure the directory holding `path` exists
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
