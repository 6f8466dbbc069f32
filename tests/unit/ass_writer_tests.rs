/*!
 * Tests for dialogue emission and script assembly
 */

use anyhow::Result;
use srt3dass::app_config::Config;
use srt3dass::ass_writer::{AssCue, Eye, EventEmitter, ScriptAssembler, StyleDefinition, EVENTS_FORMAT_LINE};
use srt3dass::subtitle_processor::{RawCue, SrtParser};
use crate::common;

/// Test the conversion of one raw cue
#[test]
fn test_ass_cue_from_raw_shouldConvertTimingAndMarkup() {
    let raw = RawCue::new("00:01:23,456", "00:01:25,009", "<b>Hi</b>");
    let cue = AssCue::from(&raw);

    assert_eq!(cue.start, "0:01:23.45");
    assert_eq!(cue.end, "0:01:25.00");
    assert_eq!(cue.text, "{\\b1}Hi{\\b0}");
}

/// Test that every cue yields a Right then Left event with identical content
#[test]
fn test_emit_withSampleFile_shouldPairRightThenLeft() -> Result<()> {
    let cues = SrtParser::parse_srt_string(common::SAMPLE_SRT)?;
    let events = EventEmitter::emit(&cues);

    assert_eq!(events.len(), 2 * cues.len());
    for pair in events.chunks(2) {
        let (right, left) = (&pair[0], &pair[1]);
        assert_eq!((right.layer, right.style), (0, "Right"));
        assert_eq!((left.layer, left.style), (1, "Left"));
        assert_eq!(right.start, left.start);
        assert_eq!(right.end, left.end);
        assert_eq!(right.text, left.text);
    }
    assert_eq!(events[2].text, "{\\i1}It contains{\\i0}\\Nmultiple lines.");

    Ok(())
}

/// Test the exact text of the events section
#[test]
fn test_render_withOneCue_shouldMatchReferenceLines() {
    let cues = vec![RawCue::new("00:00:01,000", "00:00:02,340", "Hello\\NWorld")];

    let expected = format!(
        "{}\nDialogue: 0,0:00:01.00,0:00:02.34,Right,,0,0,0,,Hello\\NWorld\nDialogue: 1,0:00:01.00,0:00:02.34,Left,,0,0,0,,Hello\\NWorld\n",
        EVENTS_FORMAT_LINE
    );
    assert_eq!(EventEmitter::render(&cues), expected);
}

/// Test that empty cues still produce both events
#[test]
fn test_emit_withEmptyText_shouldStillEmitTwoEvents() {
    let events = EventEmitter::emit(&[RawCue::new("00:00:01,000", "00:00:02,000", "")]);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].to_string(), "Dialogue: 0,0:00:01.00,0:00:02.00,Right,,0,0,0,,");
}

/// Test the mirrored margins of the two styles
#[test]
fn test_style_for_eye_withDefaults_shouldMirrorMargins() {
    let config = Config { width: 1920, depth_offset: 15, ..Config::default() };

    let right = StyleDefinition::for_eye(Eye::Right, &config);
    let left = StyleDefinition::for_eye(Eye::Left, &config);

    assert_eq!((right.margin_l, right.margin_r), (945, 0));
    assert_eq!((left.margin_l, left.margin_r), (0, 945));
}

/// Test the full document layout
#[test]
fn test_assemble_withCustomConfig_shouldWriteAllSections() {
    let config = Config {
        width: 1280,
        height: 720,
        depth_offset: 40,
        font_size: 36,
        font_name: "DejaVu Sans".to_string(),
        ..Config::default()
    };
    let cues = vec![RawCue::new("00:00:01,000", "00:00:02,000", "Hi")];

    let script = ScriptAssembler::assemble("Trailer", &config, &cues);

    let expected = "[Script Info]
; Generated by srt3dass
Title: Trailer
ScriptType: v4.00+
PlayDepth: 0
Collisions: Normal
PlayResX: 1280
PlayResY: 720

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Right,DejaVu Sans,36,&H00ffffff,&H0000ffff,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,1,0,2,600,0,10,0
Style: Left,DejaVu Sans,36,&H00ffffff,&H0000ffff,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,1,0,2,0,600,10,0

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:02.00,Right,,0,0,0,,Hi
Dialogue: 1,0:00:01.00,0:00:02.00,Left,,0,0,0,,Hi
";
    assert_eq!(script, expected);
}
