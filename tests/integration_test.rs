// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the pose pipeline library

use std::cell::RefCell;
use std::rc::Rc;

use image::RgbImage;
use posenet_pipeline::{
    BodyPart, CollectingVisualizer, CpuImageProcessor, CropRect, Dims, Frame, HumanPose2D,
    ImageProcessor, PipelineConfig, PosePipeline, ScreenTransform, ScriptedRunner, Texture,
    UiConfig, UiController, crop_offset, scale_to_screen,
};

fn gradient_frame(width: u32, height: u32) -> Frame {
    Frame::new(RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn single_part_pose(x: f32, y: f32, confidence: f32) -> HumanPose2D {
    HumanPose2D::new(vec![BodyPart::new(0, x, y, confidence)])
}

#[test]
fn test_end_to_end_tick() {
    let visualizer = Rc::new(RefCell::new(CollectingVisualizer::new()));

    let mut pipeline = PosePipeline::new(
        PipelineConfig::new()
            .with_target_dim(128)
            .with_min_confidence(0.6),
    );
    pipeline.set_processor(Box::new(CpuImageProcessor::new()));
    pipeline.set_runner(Box::new(ScriptedRunner::new(vec![vec![
        single_part_pose(10.0, 20.0, 0.9),
        single_part_pose(40.0, 50.0, 0.8),
    ]])));
    pipeline.set_visualizer(Box::new(Rc::clone(&visualizer)));
    pipeline.set_screen_transform(ScreenTransform::new(640.0, 480.0, 1.0));

    let mut ui = UiController::new(UiConfig::default());
    pipeline.tick(&gradient_frame(640, 480), &mut ui).unwrap();

    // Both poses decoded, rescaled, and pushed downstream
    assert_eq!(pipeline.poses().len(), 2);
    assert_eq!(ui.pose_count_display().text, "Poses Detected: 2");

    let recorded = visualizer.borrow();
    let (poses, cutoff) = recorded.last.as_ref().unwrap();
    assert_eq!(poses.len(), 2);
    assert!((cutoff - 0.6).abs() < f32::EPSILON);

    // The rescale matches the public mapper: source 640x480, target 128 ->
    // input (171, 128) snapped to (161, 113) by the stride-16 runner
    let source = Dims::new(640, 480);
    let input = Dims::new(161, 113);
    let offset = crop_offset(source, input);
    let expected = scale_to_screen((10.0, 20.0), input, (640.0, 480.0), offset, false);
    let part = poses[0].parts[0];
    assert!((part.x - expected.0).abs() < 1e-3);
    assert!((part.y - expected.1).abs() < 1e-3);
}

#[test]
fn test_missing_runner_skips_tick_without_side_effects() {
    let visualizer = Rc::new(RefCell::new(CollectingVisualizer::new()));

    let mut pipeline = PosePipeline::new(PipelineConfig::default());
    pipeline.set_processor(Box::new(CpuImageProcessor::new()));
    pipeline.set_visualizer(Box::new(Rc::clone(&visualizer)));

    let mut ui = UiController::new(UiConfig::default());
    let result = pipeline.tick(&gradient_frame(64, 64), &mut ui);

    assert!(result.is_ok());
    assert_eq!(visualizer.borrow().draws, 0);
    assert!(ui.pose_count_display().text.is_empty());
}

#[test]
fn test_fractional_rect_agrees_with_pixel_offset() {
    // Shader-path fractions must match the integer crop geometry for
    // arbitrary crop shapes, including odd dimensions
    let geometries = [
        (Dims::new(640, 480), Dims::new(257, 257)),
        (Dims::new(1280, 720), Dims::new(455, 256)),
        (Dims::new(999, 777), Dims::new(481, 481)),
    ];

    for (source, input) in geometries {
        let offset = crop_offset(source, input);
        let rect = CropRect::from_pixels(offset, input, source);

        let eps = 1e-6;
        assert!((rect.x - offset.x as f32 / source.x as f32).abs() < eps);
        assert!((rect.y - offset.y as f32 / source.y as f32).abs() < eps);
        assert!((rect.width - input.x as f32 / source.x as f32).abs() < eps);
        assert!((rect.height - input.y as f32 / source.y as f32).abs() < eps);
    }
}

#[test]
fn test_crop_paths_are_equivalent() {
    let mut processor = CpuImageProcessor::new();
    let frame = gradient_frame(96, 72);
    let source_dims = frame.dims();
    let input_dims = Dims::new(49, 49);
    let offset = crop_offset(source_dims, input_dims);

    let mut source = Texture::new(source_dims);
    processor.blit(&frame, &mut source).unwrap();

    let mut by_compute = Texture::new(input_dims);
    processor
        .crop_compute(&source, &mut by_compute, offset)
        .unwrap();

    let rect = CropRect::from_pixels(offset, input_dims, source_dims);
    let mut by_shader = Texture::new(input_dims);
    processor
        .crop_shader(&source, &mut by_shader, &rect)
        .unwrap();

    for (a, b) in by_compute.data.iter().zip(by_shader.data.iter()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn test_identity_mapping() {
    let input = Dims::new(320, 240);
    let mapped = scale_to_screen((12.25, 200.5), input, (320.0, 240.0), Dims::new(0, 0), false);
    assert!((mapped.0 - 12.25).abs() < f32::EPSILON);
    assert!((mapped.1 - 200.5).abs() < f32::EPSILON);
}

#[test]
fn test_mirror_reflects_x_about_midline() {
    let input = Dims::new(256, 256);
    let screen = (1280.0, 720.0);
    let offset = Dims::new(16, 8);

    for coord in [(0.0, 0.0), (128.0, 64.0), (255.0, 255.0)] {
        let plain = scale_to_screen(coord, input, screen, offset, false);
        let mirrored = scale_to_screen(coord, input, screen, offset, true);
        assert!((mirrored.0 - (screen.0 - plain.0)).abs() < 1e-3);
        assert!((mirrored.1 - plain.1).abs() < f32::EPSILON);
    }
}

#[test]
fn test_pose_count_display_toggle() {
    let mut ui = UiController::new(UiConfig::default());
    ui.update_pose_count(0);
    assert_eq!(ui.pose_count_display().text, "Poses Detected: 0");
    ui.update_pose_count(1);
    assert_eq!(ui.pose_count_display().text, "Poses Detected: 1");
    ui.update_pose_count(37);
    assert_eq!(ui.pose_count_display().text, "Poses Detected: 37");
    assert!(ui.pose_count_display().visible);

    let mut hidden_ui = UiController::new(UiConfig::default().with_pose_count(false));
    hidden_ui.update_pose_count(5);
    hidden_ui.tick(0.0, 0.016);
    assert!(!hidden_ui.pose_count_display().visible);
}

#[test]
fn test_fps_display_refresh_interval() {
    let mut ui = UiController::new(UiConfig::default().with_fps_refresh_rate(0.1));

    ui.tick(0.0, 0.010);
    let first = ui.fps_display().text.clone();
    assert_eq!(first, "FPS: 100");

    // Two updates 0.05s apart with a 0.1s refresh rate: no change
    ui.tick(0.05, 0.040);
    assert_eq!(ui.fps_display().text, first);
}
