// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! UI text surfaces.
//!
//! [`UiController`] owns the two text displays: a push-driven pose counter
//! and a rate-limited FPS readout. The host renders the [`TextDisplay`]
//! values however it likes and drives the controller with an explicit clock;
//! nothing here reads global time.

#![allow(clippy::cast_possible_truncation)]

use crate::config::UiConfig;
use crate::visualizer::Color;

/// One on-screen text surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDisplay {
    /// Whether the surface should be rendered.
    pub visible: bool,
    /// Current text content.
    pub text: String,
    /// Text color.
    pub color: Color,
}

impl TextDisplay {
    fn hidden(color: Color) -> Self {
        Self {
            visible: false,
            text: String::new(),
            color,
        }
    }
}

/// Controller for the pose-count and FPS text displays.
///
/// The pose count updates only when the pipeline pushes a new value. The FPS
/// readout is the one time-driven piece: it recomputes from the most recent
/// unscaled frame time no more often than the configured refresh interval,
/// so the number stays readable.
#[derive(Debug)]
pub struct UiController {
    config: UiConfig,
    pose_count: TextDisplay,
    fps: TextDisplay,
    fps_timer: f32,
}

impl UiController {
    /// Create a controller with the given configuration.
    ///
    /// Both displays start empty; visibility follows the configured toggles
    /// from the first tick.
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        let color = config.text_color;
        Self {
            config,
            pose_count: TextDisplay::hidden(color),
            fps: TextDisplay::hidden(color),
            fps_timer: 0.0,
        }
    }

    /// Show or hide the pose count display.
    pub fn set_show_pose_count(&mut self, show: bool) {
        self.config.show_pose_count = show;
        self.pose_count.visible = show;
    }

    /// Show or hide the FPS display.
    pub fn set_show_fps(&mut self, show: bool) {
        self.config.show_fps = show;
        self.fps.visible = show;
    }

    /// Push a new pose count from the pipeline.
    pub fn update_pose_count(&mut self, count: usize) {
        self.pose_count.text = format!("Poses Detected: {count}");
        self.pose_count.visible = self.config.show_pose_count;
    }

    /// Advance the display state by one tick.
    ///
    /// # Arguments
    ///
    /// * `unscaled_time` - Monotonic time since start, in seconds.
    /// * `unscaled_delta` - Duration of the most recent frame, in seconds.
    pub fn tick(&mut self, unscaled_time: f32, unscaled_delta: f32) {
        self.pose_count.visible = self.config.show_pose_count;
        self.fps.visible = self.config.show_fps;

        if self.config.show_fps && unscaled_time >= self.fps_timer && unscaled_delta > 0.0 {
            let fps = (1.0 / unscaled_delta) as i32;
            self.fps.text = format!("FPS: {fps}");
            self.fps_timer = unscaled_time + self.config.fps_refresh_rate;
        }
    }

    /// The pose count display.
    #[must_use]
    pub const fn pose_count_display(&self) -> &TextDisplay {
        &self.pose_count
    }

    /// The FPS display.
    #[must_use]
    pub const fn fps_display(&self) -> &TextDisplay {
        &self.fps
    }
}
