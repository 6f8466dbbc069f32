use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{warn, debug};
use crate::errors::ConversionError;
use crate::file_utils::{FileManager, UTF8_BOM};

// @module: SRT parsing

/// Separator between the two timestamps of a timing line
pub const TIMING_SEPARATOR: &str = " --> ";

/// Width of an SRT timestamp (`HH:MM:SS,mmm`)
pub const SRT_TIMESTAMP_LEN: usize = 12;

/// Offset of the end timestamp inside a timing line
pub const END_TIMESTAMP_OFFSET: usize = SRT_TIMESTAMP_LEN + TIMING_SEPARATOR.len();

/// Forced line break joining the text lines of one block
pub const LINE_BREAK_MARKER: &str = "\\N";

// @struct: One SRT block before transformation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCue {
    // @field: Start timestamp as written (`HH:MM:SS,mmm`)
    pub start_raw: String,

    // @field: End timestamp as written
    pub end_raw: String,

    // @field: Text lines joined by `\N`, carriage returns trimmed
    pub body_raw: String,
}

impl RawCue {
    pub fn new(start_raw: &str, end_raw: &str, body_raw: &str) -> Self {
        RawCue {
            start_raw: start_raw.to_string(),
            end_raw: end_raw.to_string(),
            body_raw: body_raw.to_string(),
        }
    }
}

/// Which line of a block the parser expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Number,
    Timestamp,
    Text,
}

/// Line-oriented SRT block parser.
///
/// Blocks must be numbered from 1 without gaps. Anything else in an index
/// position aborts the parse with the offending line number.
#[derive(Debug)]
pub struct SrtParser {
    state: ParserState,
    expected_index: usize,
    start_raw: String,
    end_raw: String,
    body: String,
    text_lines: usize,
    cues: Vec<RawCue>,
}

impl Default for SrtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SrtParser {
    pub fn new() -> Self {
        SrtParser {
            state: ParserState::Number,
            expected_index: 1,
            start_raw: String::new(),
            end_raw: String::new(),
            body: String::new(),
            text_lines: 0,
            cues: Vec::new(),
        }
    }

    /// Parse SRT format string into raw cues, in file order
    pub fn parse_srt_string(content: &str) -> Result<Vec<RawCue>, ConversionError> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let mut parser = Self::new();

        for (index, line) in content.split('\n').enumerate() {
            parser.feed_line(index + 1, line)?;
        }

        Ok(parser.finish())
    }

    /// Advance the state machine by one line
    fn feed_line(&mut self, line_number: usize, line: &str) -> Result<(), ConversionError> {
        if line.is_empty() || line == "\r" {
            self.end_block(line_number);
            return Ok(());
        }

        match self.state {
            ParserState::Number => {
                match line.trim().parse::<usize>() {
                    Ok(index) if index == self.expected_index => {
                        self.expected_index += 1;
                        self.state = ParserState::Timestamp;
                    }
                    _ => {
                        return Err(ConversionError::InvalidCueIndex {
                            line_number,
                            expected: self.expected_index,
                            found: line.trim_end_matches('\r').to_string(),
                        });
                    }
                }
            }
            ParserState::Timestamp => {
                if line.get(SRT_TIMESTAMP_LEN..END_TIMESTAMP_OFFSET) != Some(TIMING_SEPARATOR) {
                    debug!("Unexpected timing line shape on line {}: {:?}", line_number, line);
                }
                self.start_raw = slice_chars(line, 0, SRT_TIMESTAMP_LEN);
                self.end_raw = slice_chars(line, END_TIMESTAMP_OFFSET, SRT_TIMESTAMP_LEN);
                self.state = ParserState::Text;
            }
            ParserState::Text => {
                let text = line.trim_end_matches('\r');
                if self.text_lines > 0 {
                    self.body.push_str(LINE_BREAK_MARKER);
                }
                self.body.push_str(text);
                self.text_lines += 1;
            }
        }

        Ok(())
    }

    /// Close the current block on a blank line
    fn end_block(&mut self, line_number: usize) {
        match self.state {
            ParserState::Number => {}
            ParserState::Timestamp => {
                warn!(
                    "Cue {} has no timing line (blank line {}), skipping",
                    self.expected_index - 1,
                    line_number
                );
                self.state = ParserState::Number;
            }
            ParserState::Text => self.flush(),
        }
    }

    fn flush(&mut self) {
        let cue = RawCue {
            start_raw: std::mem::take(&mut self.start_raw),
            end_raw: std::mem::take(&mut self.end_raw),
            body_raw: std::mem::take(&mut self.body),
        };
        self.cues.push(cue);
        self.text_lines = 0;
        self.state = ParserState::Number;
    }

    /// Flush a block left open by a missing final blank line
    fn finish(mut self) -> Vec<RawCue> {
        match self.state {
            ParserState::Text => {
                debug!("Input ended inside cue {}, keeping it", self.expected_index - 1);
                self.flush();
            }
            ParserState::Timestamp => {
                warn!("Input ended after index line of cue {}, dropping it", self.expected_index - 1);
            }
            ParserState::Number => {}
        }
        self.cues
    }
}

/// Take `len` characters starting at character `start`, fewer if the line is short
fn slice_chars(line: &str, start: usize, len: usize) -> String {
    line.chars().skip(start).take(len).collect()
}

/// Parsed SRT file with metadata
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Name of the encoding the file was decoded with
    pub encoding: &'static str,

    /// Cues in playback order
    pub cues: Vec<RawCue>,
}

impl SubtitleCollection {
    /// Read and parse an SRT file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let loaded = FileManager::read_subtitle_text(path)?;
        debug!("Decoded {:?} as {}", path, loaded.encoding.name());

        let cues = SrtParser::parse_srt_string(&loaded.text)
            .with_context(|| format!("Failed to parse subtitle file: {:?}", path))?;

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            encoding: loaded.encoding.name(),
            cues,
        })
    }

    /// Script title, the file name without extension
    pub fn title(&self) -> String {
        self.source_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Encoding: {}", self.encoding)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
