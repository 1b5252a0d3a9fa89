// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Run Options:
    --source, -s <SOURCE>  Input image (synthetic frames when omitted)
    --frames <FRAMES>      Number of pipeline ticks to run [default: 120]
    --target-dim <DIM>     Target size for the smaller input dimension [default: 256]
    --conf <CONF>          Score threshold for pose decoding [default: 0.25]
    --nms-radius <RADIUS>  Non-maximum-suppression radius in pixels [default: 50]
    --max-poses <MAX>      Maximum poses per frame [default: 20]
    --single-pose          Decode only the highest-scoring pose
    --min-conf <CONF>      Display confidence cutoff [default: 0.5]
    --no-compute           Force the shader-style crop path
    --mirror               Treat the display surface as horizontally mirrored
    --show                 Display results in a window
    --verbose              Show verbose output

Examples:
    posenet-pipeline run --source image.jpg
    posenet-pipeline run --source image.jpg --single-pose --conf 0.5
    posenet-pipeline run --frames 300 --target-dim 512 --show
    posenet-pipeline run -s video_frame.png --mirror --min-conf 0.7"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demo pose pipeline on an image or synthetic frames
    Run(RunArgs),
}

/// Arguments for the run command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunArgs {
    /// Input image (synthetic frames when omitted)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Number of pipeline ticks to run
    #[arg(long, default_value_t = 120)]
    pub frames: usize,

    /// Target size for the smaller input dimension
    #[arg(long, default_value_t = 256)]
    pub target_dim: i32,

    /// Score threshold for pose decoding
    #[arg(long, default_value_t = 0.25)]
    pub conf: f32,

    /// Non-maximum-suppression radius in pixels
    #[arg(long, default_value_t = 50.0)]
    pub nms_radius: f32,

    /// Maximum poses per frame
    #[arg(long, default_value_t = 20)]
    pub max_poses: usize,

    /// Decode only the highest-scoring pose
    #[arg(long, default_value_t = false)]
    pub single_pose: bool,

    /// Display confidence cutoff
    #[arg(long, default_value_t = 0.5)]
    pub min_conf: f32,

    /// Force the shader-style crop path
    #[arg(long, default_value_t = false)]
    pub no_compute: bool,

    /// Treat the display surface as horizontally mirrored
    #[arg(long, default_value_t = false)]
    pub mirror: bool,

    /// Display results in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_args_defaults() {
        let args = Cli::parse_from(["app", "run"]);
        match args.command {
            Commands::Run(run_args) => {
                assert!(run_args.source.is_none());
                assert_eq!(run_args.frames, 120);
                assert_eq!(run_args.target_dim, 256);
                assert!((run_args.conf - 0.25).abs() < f32::EPSILON);
                assert!((run_args.nms_radius - 50.0).abs() < f32::EPSILON);
                assert_eq!(run_args.max_poses, 20);
                assert!(!run_args.single_pose);
                assert!(!run_args.no_compute);
                assert!(run_args.verbose);
            }
        }
    }

    #[test]
    fn test_run_args_custom() {
        let args = Cli::parse_from([
            "app",
            "run",
            "--source",
            "test.jpg",
            "--frames",
            "10",
            "--single-pose",
            "--min-conf",
            "0.8",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Run(run_args) => {
                assert_eq!(run_args.source, Some("test.jpg".to_string()));
                assert_eq!(run_args.frames, 10);
                assert!(run_args.single_pose);
                assert!((run_args.min_conf - 0.8).abs() < f32::EPSILON);
                assert!(!run_args.verbose);
            }
        }
    }
}
