// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use srt3dass::app_config::{Config, LogLevel};
use srt3dass::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an SRT file or directory (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for srt3dass
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input SRT file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Horizontal resolution of the video
    #[arg(short, long)]
    width: Option<u32>,

    /// Vertical resolution of the video
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Depth offset in pixels
    #[arg(short, long)]
    depth_offset: Option<u32>,

    /// Font size
    #[arg(short, long = "size")]
    size: Option<u32>,

    /// Font face used by both eye styles
    #[arg(long)]
    font_name: Option<String>,

    /// Output file (single file input only, defaults to INPUT_PATH with an .ass extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// srt3dass - SubRip to stereoscopic ASS converter
///
/// Turns an SRT subtitle file into an ASS script with one copy of every
/// caption per eye, offset horizontally to give the subtitle depth.
#[derive(Parser, Debug)]
#[command(name = "srt3dass")]
#[command(version)]
#[command(about = "Convert SRT subtitles to stereoscopic 3D ASS scripts")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "srt3dass converts SubRip subtitles into Advanced SubStation Alpha scripts for 3D video.

EXAMPLES:
    srt3dass movie.srt                          # Writes movie.ass next to the input
    srt3dass -w 3840 -H 2160 movie.srt          # 4K side-by-side video
    srt3dass -d 25 -s 60 movie.srt              # Deeper subtitles, bigger font
    srt3dass -o out/movie.3d.ass movie.srt      # Explicit output file
    srt3dass --log-level debug /subtitles/      # Convert a whole directory
    srt3dass completions bash > srt3dass.bash   # Generate bash completions

CONFIGURATION:
    Settings can be stored in a JSON file passed with --config, for example
    {\"width\": 3840, \"height\": 2160, \"depth_offset\": 20, \"font_size\": 60}.
    Command line options take precedence over the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and marker for log level
    fn get_style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "✗"),
            Level::Warn => ("\x1B[1;33m", "!"),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "·"),
            Level::Trace => ("\x1B[1;35m", "…"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, marker) = Self::get_style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, marker, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything, the facade's max level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srt3dass", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => run_convert(cli.convert),
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    let input_path = options.input_path.clone().ok_or_else(|| {
        anyhow!("INPUT_PATH is required")
    })?;

    let config = build_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    controller.run(&input_path, options.output.as_deref())
}

/// Load the configuration file if any, then apply command line overrides
fn build_config(options: &ConvertArgs) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(width) = options.width {
        config.width = width;
    }
    if let Some(height) = options.height {
        config.height = height;
    }
    if let Some(depth_offset) = options.depth_offset {
        config.depth_offset = depth_offset;
    }
    if let Some(size) = options.size {
        config.font_size = size;
    }
    if let Some(font_name) = &options.font_name {
        config.font_name = font_name.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}
