//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in logical surface coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

fn push_tri(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Filled regular polygon (a circle with enough sides)
pub fn polygon(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    sides: u32,
    rotation: f32,
    color: [f32; 4],
) {
    let sides = sides.max(3);
    for i in 0..sides {
        let a1 = rotation + i as f32 / sides as f32 * TAU;
        let a2 = rotation + (i + 1) as f32 / sides as f32 * TAU;
        push_tri(
            out,
            center,
            center + Vec2::from_angle(a1) * radius,
            center + Vec2::from_angle(a2) * radius,
            color,
        );
    }
}

pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    // More segments for bigger circles, tiny ones stay cheap
    let sides = (radius * 0.8).clamp(6.0, 32.0) as u32;
    polygon(out, center, radius, sides, 0.0, color);
}

/// Axis-aligned (before rotation) rectangle centered on `center`
pub fn quad(out: &mut Vec<Vertex>, center: Vec2, half: Vec2, rotation: f32, color: [f32; 4]) {
    let rot = Vec2::from_angle(rotation);
    let corner = |x: f32, y: f32| center + rot.rotate(Vec2::new(x, y));
    let tl = corner(-half.x, -half.y);
    let tr = corner(half.x, -half.y);
    let br = corner(half.x, half.y);
    let bl = corner(-half.x, half.y);
    push_tri(out, tl, tr, br, color);
    push_tri(out, tl, br, bl, color);
}

/// Pointed star with `points` tips alternating between `outer` and `inner` radius
pub fn star(
    out: &mut Vec<Vertex>,
    center: Vec2,
    outer: f32,
    inner: f32,
    points: u32,
    rotation: f32,
    color: [f32; 4],
) {
    let n = points.max(2) * 2;
    for i in 0..n {
        let r1 = if i % 2 == 0 { outer } else { inner };
        let r2 = if i % 2 == 0 { inner } else { outer };
        // Tip 0 points up
        let a1 = rotation - TAU / 4.0 + i as f32 / n as f32 * TAU;
        let a2 = rotation - TAU / 4.0 + (i + 1) as f32 / n as f32 * TAU;
        push_tri(
            out,
            center,
            center + Vec2::from_angle(a1) * r1,
            center + Vec2::from_angle(a2) * r2,
            color,
        );
    }
}

/// Upward-pointing triangle inscribed in a `size` box
pub fn ship(out: &mut Vec<Vertex>, center: Vec2, size: f32, color: [f32; 4]) {
    let h = size / 2.0;
    push_tri(
        out,
        center + Vec2::new(0.0, -h),
        center + Vec2::new(h, h),
        center + Vec2::new(-h, h),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_counts() {
        let mut out = Vec::new();
        polygon(&mut out, Vec2::ZERO, 10.0, 5, 0.0, [1.0; 4]);
        assert_eq!(out.len(), 15);

        out.clear();
        quad(&mut out, Vec2::ZERO, Vec2::ONE, 0.0, [1.0; 4]);
        assert_eq!(out.len(), 6);

        out.clear();
        star(&mut out, Vec2::ZERO, 10.0, 4.0, 5, 0.0, [1.0; 4]);
        assert_eq!(out.len(), 30);
    }

    #[test]
    fn test_star_tip_points_up() {
        let mut out = Vec::new();
        star(&mut out, Vec2::new(50.0, 50.0), 10.0, 4.0, 5, 0.0, [1.0; 4]);
        // Second vertex of the first triangle is tip 0
        let tip = out[1].position;
        assert!((tip[0] - 50.0).abs() < 1e-4);
        assert!((tip[1] - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_quad_rotation_keeps_center() {
        let mut out = Vec::new();
        quad(&mut out, Vec2::new(5.0, 5.0), Vec2::new(2.0, 1.0), 1.0, [1.0; 4]);
        let sum = out
            .iter()
            .fold(Vec2::ZERO, |acc, v| acc + Vec2::from(v.position));
        let mean = sum / out.len() as f32;
        assert!((mean - Vec2::new(5.0, 5.0)).length() < 1.0);
    }
}
