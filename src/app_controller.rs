use anyhow::{Result, anyhow};
use log::{error, info, debug};
use std::path::{Path, PathBuf};
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::ass_writer::ScriptAssembler;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle conversion

/// Outcome of converting a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Main application controller for SRT to stereoscopic ASS conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert a file or every SRT file of a directory
    pub fn run(&self, input_path: &Path, output_path: Option<&Path>) -> Result<()> {
        if input_path.is_file() {
            self.convert_file(input_path, output_path)?;
            Ok(())
        } else if input_path.is_dir() {
            if output_path.is_some() {
                return Err(anyhow!("--output cannot be used with a directory input"));
            }
            let summary = self.run_folder(input_path)?;
            if summary.failed > 0 {
                return Err(anyhow!("{} of {} file(s) failed to convert",
                    summary.failed, summary.failed + summary.converted));
            }
            Ok(())
        } else {
            Err(anyhow!("Input path does not exist: {:?}", input_path))
        }
    }

    /// Render the ASS script for one SRT file without writing it
    pub fn convert_to_string(&self, input_file: &Path) -> Result<String> {
        let subtitles = SubtitleCollection::load(input_file)?;
        debug!("{}", subtitles);
        Ok(ScriptAssembler::assemble(&subtitles.title(), &self.config, &subtitles.cues))
    }

    /// Convert one SRT file and return the path written.
    ///
    /// Nothing is written when the input fails to parse.
    pub fn convert_file(&self, input_file: &Path, output_path: Option<&Path>) -> Result<PathBuf> {
        let start_time = Instant::now();

        let subtitles = SubtitleCollection::load(input_file)?;
        let script = ScriptAssembler::build(&subtitles.title(), &self.config, &subtitles.cues);

        let output_path = output_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| FileManager::generate_output_path(input_file));
        FileManager::write_with_bom(&output_path, &script.to_string())?;

        info!(
            "Converted {} cue(s) ({} events, {}) in {}: {}",
            subtitles.cues.len(),
            script.events.len(),
            subtitles.encoding,
            Self::format_duration(start_time.elapsed()),
            output_path.display()
        );

        Ok(output_path)
    }

    /// Run the workflow in folder mode, converting every SRT file under a directory
    pub fn run_folder(&self, input_dir: &Path) -> Result<FolderSummary> {
        let start_time = Instant::now();

        let srt_files = FileManager::find_files(input_dir, "srt")?;
        if srt_files.is_empty() {
            return Err(anyhow!("No SRT files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(srt_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = FolderSummary::default();

        for srt_file in &srt_files {
            let file_name = srt_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Converting: {}", file_name));

            match self.convert_file(srt_file, None) {
                Ok(_) => summary.converted += 1,
                Err(e) => {
                    folder_pb.suspend(|| error!("Error converting {}: {:#}", file_name, e));
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder conversion complete");

        info!(
            "Folder conversion completed: {} converted, {} errors in {}",
            summary.converted,
            summary.failed,
            Self::format_duration(start_time.elapsed())
        );

        Ok(summary)
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
