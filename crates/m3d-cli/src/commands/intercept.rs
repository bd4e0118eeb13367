//! Intercept command - pursuit heading and meeting time

use anyhow::{Context, Result};
use m3d_geom::{intercept_time, try_target_intercept};
use serde_json::json;
use tracing::{info, warn};

use crate::InterceptArgs;
use crate::commands::parse_vec3;

pub fn run(args: InterceptArgs, precision: usize) -> Result<()> {
    let missile = parse_vec3(&args.missile).context("--missile")?;
    let target = parse_vec3(&args.target).context("--target")?;
    let velocity = parse_vec3(&args.velocity).context("--velocity")?;
    info!(speed = args.speed, "intercept");

    let heading = try_target_intercept(missile, args.speed, target, velocity)
        .context("Cannot intercept target")?;
    let missile_vel = heading * args.speed;

    let time = match intercept_time(missile, missile_vel, target, velocity) {
        Ok(t) => Some(t),
        Err(e) => {
            warn!("no meeting time: {}", e);
            None
        }
    };
    let meeting = time.map(|t| missile + t * missile_vel);

    if args.json {
        let out = json!({
            "heading": heading,
            "velocity": missile_vel,
            "time": time,
            "point": meeting,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let p = precision;
    println!("Heading:  {:.*}", p, heading);
    println!("Velocity: {:.*}", p, missile_vel);
    match (time, meeting) {
        (Some(t), Some(pt)) => {
            println!("Time:     {:.*}", p, t);
            println!("Point:    {:.*}", p, pt);
        }
        _ => println!("Time:     none"),
    }
    Ok(())
}
