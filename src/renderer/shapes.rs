//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Axis-aligned rectangle; empty when either side is not positive
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, radius, radius, 0.0, color, segments)
}

/// Filled ellipse with radii `rx`, `ry`, rotated by `rotation` radians
pub fn ellipse(
    center: Vec2,
    rx: f32,
    ry: f32,
    rotation: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let rot = Vec2::from_angle(rotation);
    let point = |i: u32| {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        center + rot.rotate(Vec2::new(rx * theta.cos(), ry * theta.sin()))
    };

    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let p1 = point(i);
        let p2 = point(i + 1);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Rotate about the local origin, then translate to `origin`
pub fn transform(vertices: &mut [Vertex], rotation: f32, origin: Vec2) {
    let rot = Vec2::from_angle(rotation);
    for v in vertices {
        let p = origin + rot.rotate(Vec2::from(v.position));
        v.position = p.to_array();
    }
}
