//! Matrix command - determinant, transpose and inverse

use anyhow::{Context, Result, bail};
use m3d_math::{Mat3, Mat4};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use tracing::{debug, info};

use crate::MatrixArgs;
use crate::commands::{first_row_width, parse_rows};

pub fn run(args: MatrixArgs, precision: usize) -> Result<()> {
    let n = first_row_width(&args.rows);
    let rows = parse_rows(&args.rows, n).context("--rows")?;
    if rows.len() != n {
        bail!("Matrix must be square, got {} rows of {}", rows.len(), n);
    }
    info!(size = n, "matrix");

    match n {
        3 => {
            let m = to_mat3(&rows);
            report(&m, m.determinant(), m.transpose(), m.try_inverse(), args.json, precision)
        }
        4 => {
            let m = to_mat4(&rows);
            report(&m, m.determinant(), m.transpose(), m.try_inverse(), args.json, precision)
        }
        _ => bail!("Only 3x3 and 4x4 matrices are supported, got {}x{}", n, n),
    }
}

fn to_mat3(rows: &[Vec<f32>]) -> Mat3 {
    let mut m = Mat3::ZERO;
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            m[r][c] = v;
        }
    }
    m
}

fn to_mat4(rows: &[Vec<f32>]) -> Mat4 {
    let mut m = Mat4::ZERO;
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            m[r][c] = v;
        }
    }
    m
}

/// Prints a matrix with its determinant, transpose and inverse.
fn report<M: fmt::Display + Serialize>(
    m: &M,
    det: f32,
    transpose: M,
    inverse: Option<M>,
    as_json: bool,
    p: usize,
) -> Result<()> {
    debug!(det, invertible = inverse.is_some(), "matrix report");

    if as_json {
        let out = json!({
            "matrix": m,
            "determinant": det,
            "transpose": transpose,
            "inverse": inverse,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:.*}", p, m);
    println!("Determinant: {:.*}", p, det);
    println!("Transpose:");
    println!("{:.*}", p, transpose);
    match inverse {
        Some(inv) => {
            println!("Inverse:");
            println!("{:.*}", p, inv);
        }
        None => println!("Inverse: none (singular)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_mat3() {
        let rows = parse_rows("6,1,1;4,-2,5;2,8,7", 3).unwrap();
        let m = to_mat3(&rows);
        assert_eq!(m, Mat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]));
        assert_eq!(m.determinant(), -306.0);
    }

    #[test]
    fn test_report_singular_and_json() {
        let m = to_mat4(&parse_rows("1,2,3,4;5,6,7,8;20,30,40,50;25,50,75,100", 4).unwrap());
        assert!(m.try_inverse().is_none());
        report(&m, m.determinant(), m.transpose(), m.try_inverse(), true, 3).unwrap();
        let m = to_mat3(&parse_rows("6,1,1;4,-2,5;2,8,7", 3).unwrap());
        report(&m, m.determinant(), m.transpose(), m.try_inverse(), false, 3).unwrap();
    }

    #[test]
    fn test_to_mat4() {
        let rows = parse_rows("3,0,2,-1;1,2,0,-2;4,0,6,-3;5,0,2,0", 4).unwrap();
        assert_eq!(to_mat4(&rows).determinant(), 20.0);
    }
}
