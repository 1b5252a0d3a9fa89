// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::time::Instant;

use image::RgbImage;

use crate::cli::args::RunArgs;
use crate::config::{PipelineConfig, UiConfig};
use crate::geometry::ScreenTransform;
use crate::pipeline::PosePipeline;
use crate::pose::{BodyPart, HumanPose2D, NUM_KEYPOINTS};
use crate::processing::CpuImageProcessor;
use crate::runner::{Decoding, ScriptedRunner};
use crate::texture::Frame;
use crate::ui::UiController;
use crate::visualizer::CollectingVisualizer;
use crate::{error, success, verbose};

/// Synthetic frame size used when no source image is given.
const SYNTHETIC_DIMS: (u32, u32) = (640, 480);

/// Number of frames in the scripted demo sway cycle.
const DEMO_CYCLE: usize = 24;

/// Fractional keypoint layout of the demo figure, ordered by body part id.
const DEMO_FIGURE: [(f32, f32); NUM_KEYPOINTS] = [
    (0.50, 0.15), // nose
    (0.46, 0.13), // left eye
    (0.54, 0.13), // right eye
    (0.42, 0.15), // left ear
    (0.58, 0.15), // right ear
    (0.38, 0.30), // left shoulder
    (0.62, 0.30), // right shoulder
    (0.32, 0.45), // left elbow
    (0.68, 0.45), // right elbow
    (0.30, 0.58), // left wrist
    (0.70, 0.58), // right wrist
    (0.42, 0.55), // left hip
    (0.58, 0.55), // right hip
    (0.41, 0.75), // left knee
    (0.59, 0.75), // right knee
    (0.40, 0.93), // left ankle
    (0.60, 0.93), // right ankle
];

/// Run the demo pose pipeline.
#[allow(clippy::too_many_lines, clippy::cast_precision_loss)]
pub fn run_pipeline(args: &RunArgs) {
    crate::logging::set_verbose(args.verbose);

    // Source frame: a real image or a synthetic gradient
    let frame = match &args.source {
        Some(path) => match image::open(path) {
            Ok(img) => Frame::from_image(&img),
            Err(e) => {
                error!("Error loading source image: {e}");
                process::exit(1);
            }
        },
        None => {
            verbose!(
                "No source given; using a synthetic {}x{} frame",
                SYNTHETIC_DIMS.0,
                SYNTHETIC_DIMS.1
            );
            Frame::new(synthetic_frame(SYNTHETIC_DIMS.0, SYNTHETIC_DIMS.1))
        }
    };
    let source_dims = frame.dims();

    let config = PipelineConfig::new()
        .with_target_dim(args.target_dim)
        .with_compute(!args.no_compute)
        .with_score_threshold(args.conf)
        .with_nms_radius(args.nms_radius)
        .with_max_poses(args.max_poses)
        .with_decoding(Decoding::from_multi(!args.single_pose))
        .with_min_confidence(args.min_conf);

    let mut pipeline = PosePipeline::new(config);
    pipeline.set_processor(Box::new(CpuImageProcessor::new()));
    pipeline.set_runner(Box::new(ScriptedRunner::new(demo_script(
        args.target_dim as f32,
    ))));
    pipeline.set_screen_transform(ScreenTransform::new(
        source_dims.x as f32,
        source_dims.y as f32,
        if args.mirror { -1.0 } else { 1.0 },
    ));

    #[cfg(feature = "visualize")]
    let overlay = if args.show {
        let viewer = crate::visualizer::OverlayVisualizer::new(
            "PoseNet Pipeline",
            source_dims.x as usize,
            source_dims.y as usize,
        );
        match viewer {
            Ok(v) => Some(std::rc::Rc::new(std::cell::RefCell::new(v))),
            Err(e) => {
                error!("Error creating viewer: {e}");
                process::exit(1);
            }
        }
    } else {
        None
    };

    #[cfg(feature = "visualize")]
    match overlay {
        Some(ref v) => pipeline.set_visualizer(Box::new(std::rc::Rc::clone(v))),
        None => pipeline.set_visualizer(Box::new(CollectingVisualizer::new())),
    }

    #[cfg(not(feature = "visualize"))]
    {
        if args.show {
            crate::warn!(
                "--show requires the 'visualize' feature. Compile with --features visualize to enable the window."
            );
        }
        pipeline.set_visualizer(Box::new(CollectingVisualizer::new()));
    }

    verbose!(
        "posenet-pipeline {} 🚀 source {source_dims}, target dim {}",
        crate::VERSION,
        args.target_dim
    );

    let mut ui = UiController::new(UiConfig::default());
    let mut last_pose_text = String::new();
    let mut last_fps_text = String::new();

    let start = Instant::now();
    let mut last_tick = start;
    let mut total_ms = 0.0f64;
    let mut processed = 0usize;

    for i in 0..args.frames {
        let now = Instant::now();
        let unscaled_time = now.duration_since(start).as_secs_f32();
        let unscaled_delta = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        ui.tick(unscaled_time, unscaled_delta);

        #[cfg(feature = "visualize")]
        if let Some(ref v) = overlay {
            if !v.borrow().is_open() {
                verbose!("Window closed after {i} frames");
                break;
            }
            v.borrow_mut().set_background(frame.image().clone());
        }

        let tick_start = Instant::now();
        if let Err(e) = pipeline.tick(&frame, &mut ui) {
            error!("Pipeline error on frame {i}: {e}");
            process::exit(1);
        }
        total_ms += tick_start.elapsed().as_secs_f64() * 1000.0;
        processed += 1;

        // Echo the UI surfaces whenever their text changes
        let pose_display = ui.pose_count_display();
        if pose_display.visible && pose_display.text != last_pose_text {
            last_pose_text = pose_display.text.clone();
            verbose!("{last_pose_text}");
        }
        let fps_display = ui.fps_display();
        if fps_display.visible && fps_display.text != last_fps_text {
            last_fps_text = fps_display.text.clone();
            verbose!("{last_fps_text}");
        }
    }

    let per_tick = total_ms / processed.max(1) as f64;
    success!("Processed {processed} frames, {per_tick:.1}ms per tick");
}

/// Build a synthetic gradient frame.
fn synthetic_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        image::Rgb([r, g, 64])
    })
}

/// Scripted poses for the demo runner: a swaying figure plus a fainter
/// second person, laid out in model-input pixel space.
fn demo_script(dim: f32) -> Vec<Vec<HumanPose2D>> {
    let mut script = Vec::with_capacity(DEMO_CYCLE);

    for i in 0..DEMO_CYCLE {
        let phase = i as f32 / DEMO_CYCLE as f32 * std::f32::consts::TAU;
        let sway = 0.04 * phase.sin();

        let lead = demo_figure(sway, 0.0, 1.0, 0.9, dim);
        let trail = demo_figure(-sway * 0.5, 0.2, 0.8, 0.45, dim);
        script.push(vec![lead, trail]);
    }

    script
}

/// One demo figure: the fractional layout shifted, scaled, and mapped to
/// input pixels.
fn demo_figure(sway: f32, shift_x: f32, scale: f32, confidence: f32, dim: f32) -> HumanPose2D {
    let parts = DEMO_FIGURE
        .iter()
        .enumerate()
        .map(|(id, (fx, fy))| {
            let x = (fx * scale + shift_x + sway) * dim;
            let y = fy * scale * dim;
            BodyPart::new(id, x, y, confidence)
        })
        .collect();
    HumanPose2D::new(parts)
}
