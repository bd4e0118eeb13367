//! FOV command - sentry view cone test

use anyhow::{Context, Result, bail};
use m3d_geom::FieldOfView;
use serde_json::json;
use tracing::info;

use crate::FovArgs;
use crate::commands::parse_vec2;

pub fn run(args: FovArgs) -> Result<()> {
    let sentry = parse_vec2(&args.sentry).context("--sentry")?;
    let dir = parse_vec2(&args.dir).context("--dir")?;
    let target = parse_vec2(&args.target).context("--target")?;

    if dir.try_normalized().is_err() {
        bail!("Sentry direction must be non-zero: {}", args.dir);
    }
    if args.range < 0.0 {
        bail!("Range must be non-negative: {}", args.range);
    }

    let fov = FieldOfView::from_degrees(sentry, dir, args.range, args.half_angle);
    let visible = fov.contains(target);
    info!(visible, "fov");

    if args.json {
        let out = json!({
            "sentry": sentry,
            "direction": dir,
            "range": args.range,
            "half_angle_deg": args.half_angle,
            "target": target,
            "visible": visible,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", if visible { "visible" } else { "not visible" });
    }
    Ok(())
}
