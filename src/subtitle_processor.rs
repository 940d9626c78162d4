use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;

// @module: SRT parsing and serialization

// @const: SRT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2,}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

use crate::errors::SubtitleError;

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Return a copy of this entry with the text replaced.
    /// Sequence number and timing are carried over untouched.
    pub fn with_text(&self, text: String) -> Self {
        SubtitleEntry {
            seq_num: self.seq_num,
            start_time_ms: self.start_time_ms,
            end_time_ms: self.end_time_ms,
            text,
        }
    }

    /// Parse an SRT timestamp (HH:MM:SS,mmm) to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        let parts: Vec<&str> = timestamp.split(&[':', ','][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].trim().parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Collection of subtitle entries with metadata
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a new subtitle collection
    pub fn new(source_file: PathBuf, entries: Vec<SubtitleEntry>) -> Self {
        SubtitleCollection {
            source_file,
            entries,
        }
    }

    /// Parse SRT format string into subtitle entries.
    ///
    /// The document is split into blank-line-separated blocks, each
    /// expected to carry an index line, a timestamp range line and one
    /// or more text lines. A malformed block fails the whole parse with
    /// an error naming the block's 1-based position; entries are never
    /// dropped, reordered or renumbered.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        let mut entries = Vec::new();
        let mut block_no = 0;

        for block in split_blocks(content) {
            block_no += 1;
            entries.push(Self::parse_block(block_no, &block)?);
        }

        if entries.is_empty() {
            return Err(SubtitleError::EmptyDocument);
        }

        Ok(entries)
    }

    /// Parse a single SRT block (index, timestamps, text lines)
    fn parse_block(block_no: usize, lines: &[&str]) -> Result<SubtitleEntry, SubtitleError> {
        let mut iter = lines.iter();

        let index_line = iter.next().ok_or(SubtitleError::MissingText { block: block_no })?;
        let seq_num: usize = index_line.trim().parse().map_err(|_| SubtitleError::InvalidIndex {
            block: block_no,
            value: index_line.trim().to_string(),
        })?;

        let timestamp_line = iter
            .next()
            .ok_or(SubtitleError::MissingTimestamps { block: block_no })?;
        let caps = TIMESTAMP_REGEX
            .captures(timestamp_line.trim())
            .ok_or(SubtitleError::MissingTimestamps { block: block_no })?;

        let start_time_ms = Self::capture_to_ms(&caps, 1, block_no)?;
        let end_time_ms = Self::capture_to_ms(&caps, 5, block_no)?;

        let text = iter.map(|l| l.trim_end()).collect::<Vec<_>>().join("\n");
        if text.trim().is_empty() {
            return Err(SubtitleError::MissingText { block: block_no });
        }

        Ok(SubtitleEntry::new(seq_num, start_time_ms, end_time_ms, text))
    }

    /// Convert four consecutive regex captures to milliseconds.
    /// The regex guarantees each group is numeric, but an hours field
    /// too large for u64 still fails the block rather than silently
    /// corrupting the timestamp.
    fn capture_to_ms(
        caps: &regex::Captures,
        start_idx: usize,
        block: usize,
    ) -> Result<u64, SubtitleError> {
        let field = |idx: usize| -> Result<u64, SubtitleError> {
            caps.get(idx)
                .ok_or(SubtitleError::MissingTimestamps { block })?
                .as_str()
                .parse()
                .map_err(|_| SubtitleError::MissingTimestamps { block })
        };

        let hours = field(start_idx)?;
        let minutes = field(start_idx + 1)?;
        let seconds = field(start_idx + 2)?;
        let millis = field(start_idx + 3)?;

        hours
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minutes * 60 + seconds))
            .and_then(|s| s.checked_mul(1000))
            .and_then(|ms| ms.checked_add(millis))
            .ok_or(SubtitleError::MissingTimestamps { block })
    }

    /// Serialize entries back to SRT text, blocks separated by a blank
    /// line. Inverse of [`parse_srt_string`](Self::parse_srt_string).
    pub fn to_srt_string(entries: &[SubtitleEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            // Display emits the full block including the trailing blank line
            out.push_str(&entry.to_string());
        }
        out
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for entry in &self.entries {
            write!(file, "{}", entry)?;
        }

        Ok(())
    }
}

/// Split raw SRT content into blocks of non-empty lines.
/// Handles both `\n` and `\r\n` documents; a UTF-8 BOM on the first
/// line is stripped.
fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
