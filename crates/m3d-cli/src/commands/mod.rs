//! CLI command implementations

pub mod bezier;
pub mod demo;
pub mod fov;
pub mod intercept;
pub mod matrix;
pub mod rotate;

use anyhow::{Result, bail};
use m3d_math::{Vec2, Vec3};

/// Parse a comma-separated list of exactly `n` floats, e.g. "1, -2.5, 3"
pub fn parse_floats(s: &str, n: usize) -> Result<Vec<f32>> {
    let values: Result<Vec<f32>, _> = s.split(',').map(|p| p.trim().parse::<f32>()).collect();
    let values = values.map_err(|_| anyhow::anyhow!("Invalid number list: {}", s))?;

    if values.len() != n {
        bail!("Expected {} values, got {}: {}", n, values.len(), s);
    }
    Ok(values)
}

/// Parse "x,y"
pub fn parse_vec2(s: &str) -> Result<Vec2> {
    let v = parse_floats(s, 2)?;
    Ok(Vec2::new(v[0], v[1]))
}

/// Parse "x,y,z"
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    let v = parse_floats(s, 3)?;
    Ok(Vec3::new(v[0], v[1], v[2]))
}

/// Parse ';'-separated rows of `width` floats each
pub fn parse_rows(s: &str, width: usize) -> Result<Vec<Vec<f32>>> {
    s.split(';')
        .filter(|row| !row.trim().is_empty())
        .map(|row| parse_floats(row, width))
        .collect()
}

/// Width of the first row of a ';'-separated table
pub fn first_row_width(s: &str) -> usize {
    s.split(';')
        .find(|row| !row.trim().is_empty())
        .map(|row| row.split(',').count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1, -2.5,3").unwrap(), Vec3::new(1.0, -2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn test_parse_vec2() {
        assert_eq!(parse_vec2("-0.1,0").unwrap(), Vec2::new(-0.1, 0.0));
        assert!(parse_vec2("").is_err());
    }

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows("6,1,1; 4,-2,5; 2,8,7;", 3).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![4.0, -2.0, 5.0]);
        assert!(parse_rows("1,2,3;4,5", 3).is_err());
    }

    #[test]
    fn test_first_row_width() {
        assert_eq!(first_row_width("1,2,3,4;5,6,7,8"), 4);
        assert_eq!(first_row_width(" ;1,2"), 2);
        assert_eq!(first_row_width(""), 0);
    }
}
