//! Integration tests for the m3d crates.
//!
//! Exercises the kernel through its public surface, checks the geometry
//! helpers against it, and uses `glam` as an independent reference.
