//! Demo command - walkthrough of the matrix and quaternion kernel

use anyhow::{Result, bail};
use m3d_math::{Mat3, Mat4, Quat, Vec3};
use tracing::{debug, info};

pub fn run(precision: usize) -> Result<()> {
    info!("running kernel demo");
    let p = precision;

    let mat = Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [20.0, 30.0, 40.0, 50.0],
        [25.0, 50.0, 75.0, 100.0],
    ]);
    println!("Matrix:");
    println!("{:.*}", p, mat);
    println!("Minor (2, 1):");
    println!("{:.*}", p, mat.minor(2, 1));
    println!("Determinant: {:.*}", p, mat.determinant());
    println!();

    let m3 = Mat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    println!("{:.*}", p, m3);
    println!("Determinant: {:.*}", p, m3.determinant());
    println!();

    let m4 = Mat4::from_rows([
        [3.0, 0.0, 2.0, -1.0],
        [1.0, 2.0, 0.0, -2.0],
        [4.0, 0.0, 6.0, -3.0],
        [5.0, 0.0, 2.0, 0.0],
    ]);
    println!("{:.*}", p, m4);
    println!("Determinant: {:.*}", p, m4.determinant());

    let Some(inv) = m4.try_inverse() else {
        bail!("demo matrix unexpectedly singular");
    };
    println!("Inverse:");
    println!("{:.*}", p, inv);
    debug!(
        roundtrip_ok = (m4 * inv).approx_eq(&Mat4::IDENTITY, 1e-3),
        "inverse check"
    );
    println!();

    let m1 = Mat4::from_rows([
        [5.0, 2.0, 6.0, 1.0],
        [0.0, 6.0, 2.0, 0.0],
        [3.0, 8.0, 1.0, 4.0],
        [1.0, 8.0, 5.0, 6.0],
    ]);
    let m2 = Mat4::from_rows([
        [7.0, 5.0, 8.0, 0.0],
        [1.0, 8.0, 2.0, 6.0],
        [9.0, 4.0, 3.0, 8.0],
        [5.0, 3.0, 7.0, 9.0],
    ]);
    println!("Product:");
    println!("{:.*}", p, m1 * m2);
    println!();

    let v = Vec3::X;
    let axis = Vec3::new(0.0, 0.0, 2.0);
    let rotated = Quat::rotate_vector(v, axis, 90.0);
    println!("Rotate {:.*} by 90 degrees about {:.*}:", p, v, p, axis);
    println!("{:.*}", p, rotated);
    println!("Length before {:.*}, after {:.*}", p, v.length(), p, rotated.length());

    Ok(())
}
