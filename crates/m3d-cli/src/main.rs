//! m3d - 3D math kit calculator
//!
//! Runs the kernel's demonstration and exposes the geometry helpers as
//! one-shot calculators.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "m3d")]
#[command(author, version, about = "3D math kit calculator")]
#[command(long_about = "
Vectors, matrices, quaternions and small geometry helpers.

Examples:
  m3d demo                                      # Kernel walkthrough
  m3d rotate --vector 1,0,0 --axis 0,0,1 --angle 90
  m3d matrix --rows \"6,1,1;4,-2,5;2,8,7\"        # det, transpose, inverse
  m3d fov --sentry 0,0 --dir 1,0 --range 1.5 --half-angle 45 --target -0.1,0
  m3d bezier --points \"0,0;1,2;2,0\" --samples 4
  m3d intercept --missile 0,0,0 --speed 5 --target 0,10,0 --velocity 3,0,0
  m3d -p 3 matrix --rows \"3,0,2,-1;1,2,0,-2;4,0,6,-3;5,0,2,0\" --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decimal digits when printing numbers
    #[arg(short, long, global = true, default_value = "6")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the matrix and quaternion kernel
    Demo,

    /// Rotate a vector about an axis (quaternion sandwich)
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Determinant, transpose and inverse of a 3x3 or 4x4 matrix
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Test whether a target is inside a sentry's view cone
    Fov(FovArgs),

    /// Sample a quadratic or cubic 2D Bezier curve
    #[command(visible_alias = "b")]
    Bezier(BezierArgs),

    /// Heading and meeting time for a pursuing missile
    Intercept(InterceptArgs),
}

#[derive(Args)]
struct RotateArgs {
    /// Vector to rotate, "x,y,z"
    #[arg(long, allow_hyphen_values = true)]
    vector: String,

    /// Rotation axis, "x,y,z" (normalized before use)
    #[arg(long, allow_hyphen_values = true)]
    axis: String,

    /// Angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    angle: f32,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MatrixArgs {
    /// Rows separated by ';', values by ',' (3x3 or 4x4)
    #[arg(long, allow_hyphen_values = true)]
    rows: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FovArgs {
    /// Sentry position, "x,y"
    #[arg(long, allow_hyphen_values = true)]
    sentry: String,

    /// Sentry facing, "x,y"
    #[arg(long, allow_hyphen_values = true)]
    dir: String,

    /// Viewing range
    #[arg(long)]
    range: f32,

    /// Half of the view cone's opening angle, in degrees
    #[arg(long = "half-angle")]
    half_angle: f32,

    /// Target position, "x,y"
    #[arg(long, allow_hyphen_values = true)]
    target: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BezierArgs {
    /// Control points "x,y;x,y;..." (3 = quadratic, 4 = cubic)
    #[arg(long, allow_hyphen_values = true)]
    points: String,

    /// Number of segments; prints samples + 1 points
    #[arg(short, long, default_value = "10")]
    samples: usize,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InterceptArgs {
    /// Missile position, "x,y,z"
    #[arg(long, allow_hyphen_values = true)]
    missile: String,

    /// Missile speed
    #[arg(long)]
    speed: f32,

    /// Target position, "x,y,z"
    #[arg(long, allow_hyphen_values = true)]
    target: String,

    /// Target velocity, "x,y,z"
    #[arg(long, allow_hyphen_values = true)]
    velocity: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let precision = cli.precision;
    match cli.command {
        Commands::Demo => commands::demo::run(precision),
        Commands::Rotate(args) => commands::rotate::run(args, precision),
        Commands::Matrix(args) => commands::matrix::run(args, precision),
        Commands::Fov(args) => commands::fov::run(args),
        Commands::Bezier(args) => commands::bezier::run(args, precision),
        Commands::Intercept(args) => commands::intercept::run(args, precision),
    }
}
