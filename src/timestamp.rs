/*!
 * SRT to ASS timestamp conversion.
 *
 * SRT timestamps look like `HH:MM:SS,mmm`, ASS timestamps like `H:MM:SS.cc`.
 * The conversion is textual: the leading hour digit is dropped, the third
 * millisecond digit is truncated and the decimal comma becomes a period.
 * Hours of ten or more do not survive the conversion.
 */

use log::debug;

/// Converts SRT timestamps to the ASS representation
pub struct TimestampConverter;

impl TimestampConverter {
    /// Convert one raw SRT timestamp, e.g. `00:01:23,456` becomes `0:01:23.45`.
    ///
    /// Input that does not have the 12-character SRT shape is converted with
    /// the same character operations and no validation.
    pub fn convert(srt_timestamp: &str) -> String {
        if srt_timestamp.starts_with(|c: char| c != '0') {
            debug!("Hour field of {:?} does not fit a single digit", srt_timestamp);
        }

        let mut chars = srt_timestamp.chars();
        chars.next();
        chars.next_back();

        chars.as_str().replace(',', ".")
    }
}
