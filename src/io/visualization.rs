//! Paint-event capture and GIF generation
//!
//! Records every rectangle the engine emits so the refinement can be
//! replayed as an animation after the run. The emission log is a valid
//! paint order: replaying it frame by frame reconstructs every intermediate
//! mosaic.

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{MosaicError, Result, invalid_source};
use crate::render::canvas::Canvas;
use crate::spatial::rect::Rect;
use image::{Delay, Frame};

/// One emitted rectangle paint
#[derive(Debug, Clone, Copy)]
pub struct PaintEvent {
    /// Painted region
    pub region: Rect,
    /// Fill color applied to the region
    pub fill: [u8; 3],
    /// Scheduler step that emitted the rectangle (0 for the root)
    pub step: usize,
}

/// Captures paint events during a run for later GIF export
pub struct VisualizationCapture {
    events: Vec<PaintEvent>,
    width: u32,
    height: u32,
    outline: bool,
}

impl VisualizationCapture {
    /// Create a capture sized for the given canvas and step budget
    pub fn new(width: u32, height: u32, outline: bool, step_budget: usize) -> Self {
        // Each step emits at most four quads, plus the root emission
        Self {
            events: Vec::with_capacity(1 + step_budget * 4),
            width,
            height,
            outline,
        }
    }

    /// Record one emitted rectangle
    pub fn record(&mut self, region: Rect, fill: [u8; 3], step: usize) {
        self.events.push(PaintEvent { region, fill, step });
    }

    /// Returns all recorded paint events
    pub fn events(&self) -> &[PaintEvent] {
        &self.events
    }

    /// Returns the total number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Export the captured run as an animated GIF
    ///
    /// Frames are emitted once per scheduler step, skipping steps when the
    /// requested frame rate exceeds what GIF viewers reliably support. For
    /// example a 5 ms request against a 50 ms viewer minimum keeps every
    /// 10th step at the slower delay, preserving the apparent speed.
    ///
    /// # Errors
    ///
    /// Returns an error if no events were captured, the output directory
    /// cannot be created, or GIF encoding fails.
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_source("no paint events captured for visualization"));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MosaicError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MosaicError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut canvas = Canvas::new(self.width, self.height, self.outline);
        let mut frames = Vec::new();
        let mut steps_painted = 0;
        let mut last_step = None;

        for event in &self.events {
            if last_step.is_some_and(|step| step != event.step) {
                steps_painted += 1;
                if steps_painted % skip_factor == 0 {
                    frames.push(Self::frame_from(&canvas, delay_ms));
                }
            }
            canvas.paint(event.region, event.fill);
            last_step = Some(event.step);
        }

        // Final state always gets a frame, held longer for visibility
        frames.push(Self::frame_from(&canvas, delay_ms));
        frames.push(Self::frame_from(&canvas, delay_ms * 25));

        frames
    }

    fn frame_from(canvas: &Canvas, delay_ms: u32) -> Frame {
        Frame::from_parts(
            canvas.image().clone(),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
