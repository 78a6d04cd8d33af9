//! Bouncing circles under gravity, wall friction and soft elastic collisions.
//!
//! The physics lives in [`items`] and [`trail`], the simulation state in
//! [`scene`], and everything that touches a window goes through the
//! [`surface::Surface`] trait so the frame loop in [`frame`] can run against
//! SDL2 or a scripted fake.

pub mod frame;
pub mod items;
pub mod scene;
pub mod surface;
pub mod trail;

pub mod library {
    pub fn dot(vec1: [f64; 2], vec2: [f64; 2]) -> f64 {
        vec1[0] * vec2[0] + vec1[1] * vec2[1]
    }

    pub fn magnitude(vec: [f64; 2]) -> f64 {
        (vec[0] * vec[0] + vec[1] * vec[1]).sqrt()
    }

    pub fn normalize(vec: [f64; 2]) -> [f64; 2] {
        let mag = magnitude(vec);
        if mag == 0.0 {
            return [0.0, 0.0];
        }
        [vec[0] / mag, vec[1] / mag]
    }

    /// Vector pointing from `x` to `y`.
    pub fn find_vector(x: [f64; 2], y: [f64; 2]) -> [f64; 2] {
        [y[0] - x[0], y[1] - x[1]]
    }

    pub fn scale(vec: [f64; 2], factor: f64) -> [f64; 2] {
        [vec[0] * factor, vec[1] * factor]
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn magnitude_of_pythagorean_triple() {
            assert_eq!(magnitude([3.0, 4.0]), 5.0);
            assert_eq!(magnitude([0.0, 0.0]), 0.0);
        }

        #[test]
        fn normalize_zero_vector_stays_zero() {
            assert_eq!(normalize([0.0, 0.0]), [0.0, 0.0]);
            let unit = normalize([0.0, -7.0]);
            assert_eq!(unit, [0.0, -1.0]);
        }

        #[test]
        fn find_vector_points_from_first_to_second() {
            assert_eq!(find_vector([1.0, 1.0], [4.0, -1.0]), [3.0, -2.0]);
            assert_eq!(dot([1.0, 2.0], [3.0, 4.0]), 11.0);
            assert_eq!(scale([1.0, -2.0], 0.5), [0.5, -1.0]);
        }
    }
}
