//! Bezier command - sample a 2D curve

use anyhow::{Context, Result, bail};
use m3d_geom::{CubicBezier2D, Curve2D, QuadBezier2D};
use m3d_math::Vec2;
use serde_json::json;
use tracing::info;

use crate::BezierArgs;
use crate::commands::parse_rows;

pub fn run(args: BezierArgs, precision: usize) -> Result<()> {
    let controls: Vec<Vec2> = parse_rows(&args.points, 2)
        .context("--points")?
        .into_iter()
        .map(|p| Vec2::new(p[0], p[1]))
        .collect();

    let curve: Box<dyn Curve2D> = match controls.as_slice() {
        &[p0, p1, p2] => Box::new(QuadBezier2D::new(p0, p1, p2)),
        &[p0, p1, p2, p3] => Box::new(CubicBezier2D::new(p0, p1, p2, p3)),
        _ => bail!(
            "Expected 3 (quadratic) or 4 (cubic) control points, got {}",
            controls.len()
        ),
    };
    info!(degree = controls.len() - 1, samples = args.samples, "bezier");

    let points = curve.sample(args.samples);

    if args.json {
        let out = json!({
            "controls": controls,
            "points": points,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let n = args.samples.max(1);
        for (i, pt) in points.iter().enumerate() {
            println!("t={:.*} {:.*}", precision, i as f32 / n as f32, precision, pt);
        }
    }
    Ok(())
}
