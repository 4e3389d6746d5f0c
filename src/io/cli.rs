//! Command-line interface for batch processing PNG files into mosaics

use crate::engine::scheduler::{Decomposer, DecomposerConfig};
use crate::io::configuration::{
    DEFAULT_AREA_EXPONENT, DEFAULT_MIN_DIMENSION, DEFAULT_STEP_BUDGET, GIF_FRAME_DELAY_MS,
    OUTPUT_SUFFIX, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_source};
use crate::io::image::{export_canvas_as_png, load_pixel_buffer};
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use crate::render::canvas::Canvas;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quadmosaic")]
#[command(
    author,
    version,
    about = "Approximate images with a progressively refined quad mosaic"
)]
/// Command-line arguments for the mosaic generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Maximum refinement steps before stopping
    #[arg(short, long, default_value_t = DEFAULT_STEP_BUDGET)]
    pub iterations: usize,

    /// Minimum region dimension; regions at or below it are never split
    #[arg(short, long, default_value_t = DEFAULT_MIN_DIMENSION)]
    pub min_size: i32,

    /// Exponent applied to region area when scoring
    #[arg(short, long, default_value_t = DEFAULT_AREA_EXPONENT)]
    pub area_power: f64,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Draw a one-pixel border around each painted rectangle
    #[arg(short, long)]
    pub outline: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration derived from the flags
    pub const fn engine_config(&self) -> DecomposerConfig {
        DecomposerConfig {
            step_budget: self.iterations,
            minimum_dimension: self.min_size,
            area_exponent: self.area_power,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_source("target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_source("target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = derived_path(input_path, OUTPUT_SUFFIX, "png");
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let pixels = load_pixel_buffer(input_path)?;
        let config = self.cli.engine_config();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, config.step_budget);
        }

        let mut engine = Decomposer::new(&pixels, config)?;
        let mut canvas = Canvas::new(pixels.width(), pixels.height(), self.cli.outline);
        let mut capture = self.cli.visualize.then(|| {
            VisualizationCapture::new(
                pixels.width(),
                pixels.height(),
                self.cli.outline,
                config.step_budget,
            )
        });

        let root = engine.root();
        canvas.paint(root.region, root.fill);
        if let Some(ref mut viz) = capture {
            viz.record(root.region, root.fill, 0);
        }

        while !engine.is_done() {
            let quads = engine.step();
            let step = engine.steps_taken();

            for quad in &quads {
                canvas.paint(quad.region, quad.fill);
                if let Some(ref mut viz) = capture {
                    viz.record(quad.region, quad.fill, step);
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.update_step(step);
            }
        }

        let output_path = derived_path(input_path, OUTPUT_SUFFIX, "png");
        export_canvas_as_png(
            &canvas,
            output_path
                .to_str()
                .ok_or_else(|| invalid_source("invalid output path"))?,
        )?;

        if let Some(ref viz) = capture {
            let viz_path = derived_path(input_path, VISUALIZATION_SUFFIX, "gif");
            viz.export_gif(
                viz_path
                    .to_str()
                    .ok_or_else(|| invalid_source("invalid visualization path"))?,
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}

/// Derive a sibling output path by appending a suffix to the file stem
pub fn derived_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}
