//! Rotate command - axis-angle rotation of a vector

use anyhow::{Context, Result};
use m3d_math::Quat;
use serde_json::json;
use tracing::{debug, info};

use crate::RotateArgs;
use crate::commands::parse_vec3;

pub fn run(args: RotateArgs, precision: usize) -> Result<()> {
    let vector = parse_vec3(&args.vector).context("--vector")?;
    let axis = parse_vec3(&args.axis).context("--axis")?;
    info!(angle = args.angle, "rotate");

    if axis.try_normalized().is_err() {
        anyhow::bail!("Rotation axis must be non-zero: {}", args.axis);
    }

    let rotated = Quat::rotate_vector(vector, axis, args.angle);
    debug!(before = vector.length(), after = rotated.length(), "length");

    if args.json {
        let out = json!({
            "vector": vector,
            "axis": axis,
            "angle_deg": args.angle,
            "rotated": rotated,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:.*}", precision, rotated);
    }
    Ok(())
}
