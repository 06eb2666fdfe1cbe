//! Distance math over the room's 3D space.

use atrium_types::Position;

/// Euclidean distance between two points in 3-space.
///
/// Pure and total: never fails, no side effects.
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    dz.mul_add(dz, dy.mul_add(dy, dx * dx)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Position::new(1.5, -2.0, 7.25);
        assert!(distance(p, p).abs() < EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert!((distance(a, b) - distance(b, a)).abs() < EPSILON);
    }

    #[test]
    fn pythagorean_triple_in_three_dimensions() {
        // 3-4-12 gives a 13-unit diagonal.
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert!((distance(a, b) - 13.0).abs() < EPSILON);
    }

    #[test]
    fn axis_aligned_distance() {
        let a = Position::new(-4.0, 0.0, 0.0);
        let b = Position::new(4.0, 0.0, 0.0);
        assert!((distance(a, b) - 8.0).abs() < EPSILON);
    }
}
