/*!
 * ASS script generation.
 *
 * Every cue is emitted twice, once per eye, on two layers with mirrored
 * margin styles. A stereo-capable player shows one copy to each eye and the
 * horizontal offset between them places the subtitle in depth.
 */

use std::fmt;

use crate::app_config::Config;
use crate::formatting::MarkupTranslator;
use crate::subtitle_processor::RawCue;
use crate::timestamp::TimestampConverter;

/// Column header of the `[Events]` section
pub const EVENTS_FORMAT_LINE: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Column header of the `[V4+ Styles]` section
pub const STYLES_FORMAT_LINE: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, \
OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, \
BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

const GENERATOR_COMMENT: &str = "; Generated by srt3dass";

/// Eye a dialogue copy is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    Right,
    Left,
}

impl Eye {
    /// Emission order for the two copies of a cue
    pub const ALL: [Eye; 2] = [Eye::Right, Eye::Left];

    pub fn layer(self) -> u8 {
        match self {
            Eye::Right => 0,
            Eye::Left => 1,
        }
    }

    pub fn style_name(self) -> &'static str {
        match self {
            Eye::Right => "Right",
            Eye::Left => "Left",
        }
    }
}

/// Cue with ASS timestamps and override codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssCue {
    pub start: String,
    pub end: String,
    pub text: String,
}

impl From<&RawCue> for AssCue {
    fn from(raw: &RawCue) -> Self {
        AssCue {
            start: TimestampConverter::convert(&raw.start_raw),
            end: TimestampConverter::convert(&raw.end_raw),
            text: MarkupTranslator::translate(&raw.body_raw),
        }
    }
}

/// One `Dialogue:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEvent {
    pub layer: u8,
    pub start: String,
    pub end: String,
    pub style: &'static str,
    pub text: String,
}

impl DialogueEvent {
    pub fn for_eye(cue: &AssCue, eye: Eye) -> Self {
        DialogueEvent {
            layer: eye.layer(),
            start: cue.start.clone(),
            end: cue.end.clone(),
            style: eye.style_name(),
            text: cue.text.clone(),
        }
    }
}

impl fmt::Display for DialogueEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dialogue: {},{},{},{},,0,0,0,,{}",
            self.layer, self.start, self.end, self.style, self.text
        )
    }
}

/// Turns parsed cues into dialogue events
pub struct EventEmitter;

impl EventEmitter {
    /// Right then Left copy of every cue, in input order
    pub fn emit(cues: &[RawCue]) -> Vec<DialogueEvent> {
        cues.iter()
            .map(AssCue::from)
            .flat_map(|cue| Eye::ALL.map(|eye| DialogueEvent::for_eye(&cue, eye)))
            .collect()
    }

    /// Body of the `[Events]` section, format line first
    pub fn render(cues: &[RawCue]) -> String {
        let mut events = String::from(EVENTS_FORMAT_LINE);
        events.push('\n');
        for event in Self::emit(cues) {
            events.push_str(&event.to_string());
            events.push('\n');
        }
        events
    }
}

/// One `Style:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    pub name: &'static str,
    pub font_name: String,
    pub font_size: u32,
    pub margin_l: i64,
    pub margin_r: i64,
    pub margin_v: i64,
}

impl StyleDefinition {
    /// Style for one eye; the margins mirror each other across the eyes
    pub fn for_eye(eye: Eye, config: &Config) -> Self {
        let offset = config.style_offset();
        let (margin_l, margin_r) = match eye {
            Eye::Right => (offset, 0),
            Eye::Left => (0, offset),
        };

        StyleDefinition {
            name: eye.style_name(),
            font_name: config.font_name.clone(),
            font_size: config.font_size,
            margin_l,
            margin_r,
            margin_v: 10,
        }
    }
}

impl fmt::Display for StyleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // white text, yellow karaoke fill, black outline and shadow, bottom centre
        write!(
            f,
            "Style: {},{},{},&H00ffffff,&H0000ffff,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,1,0,2,{},{},{},0",
            self.name, self.font_name, self.font_size, self.margin_l, self.margin_r, self.margin_v
        )
    }
}

/// Complete ASS document
#[derive(Debug, Clone)]
pub struct AssScript {
    pub title: String,
    pub play_res_x: u32,
    pub play_res_y: u32,
    pub styles: Vec<StyleDefinition>,
    pub events: Vec<DialogueEvent>,
}

impl fmt::Display for AssScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[Script Info]")?;
        writeln!(f, "{}", GENERATOR_COMMENT)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "ScriptType: v4.00+")?;
        writeln!(f, "PlayDepth: 0")?;
        writeln!(f, "Collisions: Normal")?;
        writeln!(f, "PlayResX: {}", self.play_res_x)?;
        writeln!(f, "PlayResY: {}", self.play_res_y)?;
        writeln!(f)?;

        writeln!(f, "[V4+ Styles]")?;
        writeln!(f, "{}", STYLES_FORMAT_LINE)?;
        for style in &self.styles {
            writeln!(f, "{}", style)?;
        }
        writeln!(f)?;

        writeln!(f, "[Events]")?;
        writeln!(f, "{}", EVENTS_FORMAT_LINE)?;
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}

/// Glues the header template and the events together
pub struct ScriptAssembler;

impl ScriptAssembler {
    pub fn build(title: &str, config: &Config, cues: &[RawCue]) -> AssScript {
        AssScript {
            title: title.to_string(),
            play_res_x: config.width,
            play_res_y: config.height,
            styles: Eye::ALL.iter().map(|&eye| StyleDefinition::for_eye(eye, config)).collect(),
            events: EventEmitter::emit(cues),
        }
    }

    /// Final document text
    pub fn assemble(title: &str, config: &Config, cues: &[RawCue]) -> String {
        Self::build(title, config, cues).to_string()
    }
}
