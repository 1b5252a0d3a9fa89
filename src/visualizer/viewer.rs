// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window viewer for displaying pipeline output.

use image::RgbImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{PipelineError, Result};

/// A simple image viewer using minifb.
pub struct Viewer {
    window: Window,
    /// Current window width in pixels.
    pub width: usize,
    /// Current window height in pixels.
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| PipelineError::VisualizerError(format!("Failed to create window: {e}")))?;

        // Limit update rate
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    /// Whether the window is still open (Escape and Q close it).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.window.is_open()
            && !self.window.is_key_down(Key::Escape)
            && !self.window.is_key_down(Key::Q)
    }

    /// Update the window with a new image.
    ///
    /// Returns `false` once the window has been closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the window update fails.
    pub fn update(&mut self, image: &RgbImage) -> Result<bool> {
        if !self.is_open() {
            return Ok(false);
        }

        let (img_width, img_height) = (image.width() as usize, image.height() as usize);

        // Resize buffer if needed
        let num_pixels = img_width * img_height;
        if self.buffer.len() != num_pixels {
            self.buffer.resize(num_pixels, 0);
        }

        // Pack pixels as 0x00RRGGBB for minifb
        for (i, pixel) in image.pixels().enumerate() {
            let r = u32::from(pixel[0]);
            let g = u32::from(pixel[1]);
            let b = u32::from(pixel[2]);
            self.buffer[i] = (r << 16) | (g << 8) | b;
        }

        // Update dimensions if changed
        if self.width != img_width || self.height != img_height {
            self.width = img_width;
            self.height = img_height;
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| PipelineError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }
}
