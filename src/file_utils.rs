use anyhow::{Result, Context};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::AppError;

// @module: File and directory utilities

/// Byte-order mark prepended to every generated script
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Extension of generated scripts
pub const ASS_EXTENSION: &str = "ass";

/// Decoded subtitle text together with the encoding that produced it
#[derive(Debug, Clone)]
pub struct LoadedText {
    /// Decoded text, without byte-order mark
    pub text: String,
    /// Encoding the text was decoded with
    pub encoding: &'static Encoding,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for the converted script
    // @params: input_file
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        input_file.as_ref().with_extension(ASS_EXTENSION)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a subtitle file, guessing its encoding.
    ///
    /// The bytes are decoded as UTF-8 unless a byte-order mark names another
    /// Unicode encoding. When the result contains U+FFFD anywhere, the same
    /// bytes are decoded again as Windows-1252.
    pub fn read_subtitle_text<P: AsRef<Path>>(path: P) -> Result<LoadedText, AppError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| AppError::File(format!("Failed to read file {:?}: {}", path, e)))?;

        Ok(Self::decode_subtitle_bytes(&bytes))
    }

    /// Decode raw subtitle bytes with the UTF-8 then Windows-1252 rule
    pub fn decode_subtitle_bytes(bytes: &[u8]) -> LoadedText {
        let (text, encoding, _) = UTF_8.decode(bytes);
        if !text.contains('\u{FFFD}') {
            return LoadedText { text: text.into_owned(), encoding };
        }

        debug!("{} decoding produced replacement characters, falling back to windows-1252", encoding.name());
        let (text, encoding, _) = WINDOWS_1252.decode(bytes);
        LoadedText { text: text.into_owned(), encoding }
    }

    /// Write a string to a file as UTF-8 with a byte-order mark
    pub fn write_with_bom<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + content.len());
        bytes.extend_from_slice(UTF8_BOM.as_bytes());
        bytes.extend_from_slice(content.as_bytes());

        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
