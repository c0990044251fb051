//! forces.rs
//!
//! Scalar helpers shared by the integration step and the cull. Everything
//! here works on plain coordinates so the same math serves the planet,
//! the ships and the tests.

/// Euclidean distance between two points.
///
/// Coincident points give `0.0`; guarding against that is the caller's job.
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    (ax - bx).hypot(ay - by)
}

/// Newtonian attraction `G * m1 * m2 / dist^2`.
///
/// `dist` must be strictly positive, a zero distance divides by zero.
#[allow(non_snake_case)]
pub fn gravitational_force(G: f32, m1: f32, m2: f32, dist: f32) -> f32 {
    (G * m1 * m2) / (dist * dist)
}

/// Heading from `from` towards `to`, in radians, measured with `atan2`.
pub fn angle_to(from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> f32 {
    (to_y - from_y).atan2(to_x - from_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(3.0, 4.0, 0.0, 0.0), 5.0);
        assert_eq!(distance(7.0, 7.0, 7.0, 7.0), 0.0);
    }

    #[test]
    fn force_follows_inverse_square() {
        let near = gravitational_force(5.0, 5.0, 200.0, 10.0);
        let far = gravitational_force(5.0, 5.0, 200.0, 20.0);

        assert_eq!(near, 50.0);
        assert!((near / far - 4.0).abs() < 1e-5, "ratio was {}", near / far);
    }

    #[test]
    fn angle_points_at_target() {
        assert_eq!(angle_to(0.0, 0.0, 1.0, 0.0), 0.0);
        assert!((angle_to(0.0, 0.0, 0.0, 1.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle_to(0.0, 0.0, -1.0, 0.0) - PI).abs() < 1e-6);
    }
}
