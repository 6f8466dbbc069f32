/*!
 * Tests for error types and conversions
 */

use srt3dass::errors::{AppError, ConversionError};

#[test]
fn test_conversionError_invalidCueIndex_shouldDisplayLineNumber() {
    let error = ConversionError::InvalidCueIndex {
        line_number: 42,
        expected: 7,
        found: "9".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("line 42"));
    assert!(display.contains("expected 7"));
    assert!(display.contains("\"9\""));
}

#[test]
fn test_appError_fromConversionError_shouldWrapCorrectly() {
    let error: AppError = ConversionError::InvalidCueIndex {
        line_number: 1,
        expected: 1,
        found: "x".to_string(),
    }.into();
    assert!(matches!(error, AppError::Conversion(_)));
    assert!(error.to_string().starts_with("Conversion error:"));
}

#[test]
fn test_appError_fromIoError_shouldBeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert!(error.to_string().contains("missing"));
}
