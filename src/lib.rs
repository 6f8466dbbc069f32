/*!
 * # srt3dass - SubRip to stereoscopic ASS converter
 *
 * A Rust library that turns an SRT subtitle track into an Advanced SubStation
 * Alpha script for 3D video: every caption is emitted twice, once per eye,
 * with mirrored horizontal margins so the subtitle appears at a depth.
 *
 * ## Features
 *
 * - Encoding detection (UTF-8 with BOM sniffing, Windows-1252 fallback)
 * - Strict SRT block parsing with line-numbered errors
 * - Translation of `<b>`, `<i>`, `<u>` and `<font color>` markup into ASS overrides
 * - Configurable resolution, depth offset and font
 * - Single file or whole directory conversion
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `file_utils`: Text loading and script writing
 * - `subtitle_processor`: SRT block parsing
 * - `formatting`: Inline markup translation
 * - `timestamp`: SRT to ASS timestamp conversion
 * - `ass_writer`: Dialogue events, styles and script assembly
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod formatting;
pub mod timestamp;
pub mod ass_writer;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use ass_writer::{AssCue, DialogueEvent, EventEmitter, ScriptAssembler};
pub use errors::{AppError, ConversionError};
pub use formatting::MarkupTranslator;
pub use subtitle_processor::{RawCue, SrtParser};
pub use timestamp::TimestampConverter;
