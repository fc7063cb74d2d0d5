//! Frame composition: background, obstacles, then the avatar

use glam::Vec2;

use super::shapes::{circle, ellipse, rect, transform, triangle};
use super::vertex::{Vertex, as_bytes, colors};
use crate::sim::{Avatar, GameState, ObstaclePair};
use crate::tuning::Tuning;

const CIRCLE_SEGMENTS: u32 = 24;
const CAP_HEIGHT: f32 = 15.0;
const CAP_OVERHANG: f32 = 3.0;
const GRASS_HEIGHT: f32 = 15.0;
/// Wing flips between two poses on this period (ticks)
const WING_PERIOD: u64 = 15;

/// Three puffs per cloud: (x, y, radius)
const CLOUDS: [[(f32, f32, f32); 3]; 3] = [
    [(150.0, 120.0, 40.0), (200.0, 100.0, 50.0), (250.0, 120.0, 40.0)],
    [(500.0, 150.0, 30.0), (550.0, 130.0, 40.0), (600.0, 150.0, 30.0)],
    [(350.0, 80.0, 25.0), (380.0, 70.0, 30.0), (410.0, 80.0, 25.0)],
];

/// One frame's triangle list
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
}

impl Scene {
    pub fn build(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let mut vertices = Vec::new();

        background(tuning, &mut vertices);
        for pair in state.field.iter() {
            obstacle(tuning, pair, &mut vertices);
        }
        avatar(&state.avatar, state.frames, &mut vertices);

        Self { vertices }
    }

    pub fn as_bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

fn background(tuning: &Tuning, out: &mut Vec<Vertex>) {
    let (w, h) = (tuning.canvas_width, tuning.canvas_height);
    out.extend(rect(0.0, 0.0, w, h, colors::SKY));

    for cloud in CLOUDS {
        for (x, y, r) in cloud {
            out.extend(circle(Vec2::new(x, y), r, colors::CLOUD, CIRCLE_SEGMENTS));
        }
    }

    let floor_y = tuning.floor_y();
    out.extend(rect(0.0, floor_y, w, tuning.ground_height, colors::GROUND));
    out.extend(rect(0.0, floor_y, w, GRASS_HEIGHT, colors::GRASS));
}

fn obstacle(tuning: &Tuning, pair: &ObstaclePair, out: &mut Vec<Vertex>) {
    let w = tuning.obstacle_width;
    let x = pair.x;
    let bottom_h = tuning.floor_y() - pair.bottom_y;

    out.extend(rect(x, 0.0, w, pair.top_height, colors::PIPE));
    out.extend(rect(x, pair.bottom_y, w, bottom_h, colors::PIPE));

    let cap_w = w + CAP_OVERHANG * 2.0;
    out.extend(rect(
        x - CAP_OVERHANG,
        pair.top_height - CAP_HEIGHT,
        cap_w,
        CAP_HEIGHT,
        colors::PIPE_CAP,
    ));
    out.extend(rect(
        x - CAP_OVERHANG,
        pair.bottom_y,
        cap_w,
        CAP_HEIGHT,
        colors::PIPE_CAP,
    ));

    out.extend(rect(
        x + 10.0,
        0.0,
        5.0,
        pair.top_height - CAP_HEIGHT,
        colors::PIPE_HIGHLIGHT,
    ));
    out.extend(rect(
        x + 10.0,
        pair.bottom_y + CAP_HEIGHT,
        5.0,
        bottom_h - CAP_HEIGHT,
        colors::PIPE_HIGHLIGHT,
    ));
}

/// Drawn in local space around the sprite centre, then rotated into place
fn avatar(avatar: &Avatar, frames: u64, out: &mut Vec<Vertex>) {
    let r = avatar.radius;
    let mut local = circle(Vec2::ZERO, r, colors::AVATAR, CIRCLE_SEGMENTS);

    local.extend(circle(
        Vec2::new(r / 2.0, -r / 3.0),
        r / 4.0,
        colors::EYE,
        CIRCLE_SEGMENTS / 2,
    ));
    local.extend(triangle(
        Vec2::new(r, 0.0),
        Vec2::new(r + 10.0, -5.0),
        Vec2::new(r + 10.0, 5.0),
        colors::BEAK,
    ));

    let wing_up = frames % WING_PERIOD < 7;
    local.extend(if wing_up {
        ellipse(
            Vec2::new(-5.0, 5.0),
            15.0,
            10.0,
            std::f32::consts::FRAC_PI_4,
            colors::WING,
            CIRCLE_SEGMENTS,
        )
    } else {
        ellipse(Vec2::new(-5.0, 0.0), 15.0, 8.0, 0.0, colors::WING, CIRCLE_SEGMENTS)
    });

    let origin = avatar.pos + Vec2::new(avatar.width / 2.0, avatar.height / 2.0);
    transform(&mut local, avatar.rotation, origin);
    out.extend(local);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_empty_field_scene() {
        let state = GameState::new(Tuning::default(), 1, 0);
        let scene = Scene::build(&state);
        assert_eq!(scene.vertices.len() % 3, 0);
        assert_eq!(scene.as_bytes().len(), scene.vertices.len() * Vertex::STRIDE);
        // Sky first
        assert_eq!(scene.vertices[0].color, colors::SKY);
    }

    #[test]
    fn test_obstacles_add_geometry() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        let empty = Scene::build(&state).vertices.len();

        state.field.pairs.push_back(ObstaclePair::new(200.0, 100.0, 150.0));
        let scene = Scene::build(&state);
        // Two bodies, two caps, two highlights
        assert_eq!(scene.vertices.len(), empty + 6 * 6);
        assert!(scene.vertices.iter().any(|v| v.color == colors::PIPE_CAP));
    }

    #[test]
    fn test_build_is_stateless() {
        let state = GameState::new(Tuning::default(), 1, 0);
        assert_eq!(Scene::build(&state).vertices, Scene::build(&state).vertices);
    }
}
