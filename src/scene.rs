use serde::Deserialize;

use crate::solver::FluidSim;

/// Solid region stamped into the obstacle mask.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObstacleShape {
    /// Inclusive cell rectangle.
    Rect { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// Cells with `dx² + dy² <= radius²`.
    Circle { cx: i32, cy: i32, radius: i32 },
    /// Every edge cell of the grid.
    Perimeter,
}

impl ObstacleShape {
    pub fn stamp(&self, sim: &mut FluidSim) {
        match *self {
            ObstacleShape::Rect { x0, y0, x1, y1 } => {
                for y in y0.min(y1)..=y0.max(y1) {
                    for x in x0.min(x1)..=x0.max(x1) {
                        sim.set_obstacle(x, y, true);
                    }
                }
            }
            ObstacleShape::Circle { cx, cy, radius } => {
                let r = radius.abs();
                let r2 = r as i64 * r as i64;
                for y in (cy - r)..=(cy + r) {
                    for x in (cx - r)..=(cx + r) {
                        let dx = (x - cx) as i64;
                        let dy = (y - cy) as i64;
                        if dx * dx + dy * dy <= r2 {
                            sim.set_obstacle(x, y, true);
                        }
                    }
                }
            }
            ObstacleShape::Perimeter => {
                let last = sim.size() as i32 - 1;
                for i in 0..=last {
                    sim.set_obstacle(i, 0, true);
                    sim.set_obstacle(i, last, true);
                    sim.set_obstacle(0, i, true);
                    sim.set_obstacle(last, i, true);
                }
            }
        }
    }
}

/// Constant emitter applied before every step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Source {
    pub x: i32,
    pub y: i32,
    pub density: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Default for Source {
    fn default() -> Self {
        Self { x: 0, y: 0, density: 0.0, vx: 0.0, vy: 0.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub obstacles: Vec<ObstacleShape>,
    pub sources: Vec<Source>,
}

impl Scene {
    pub fn apply_obstacles(&self, sim: &mut FluidSim) {
        for shape in &self.obstacles {
            shape.stamp(sim);
        }
        log::debug!("scene: {} solid cells", sim.obstacles().count());
    }

    pub fn inject_sources(&self, sim: &mut FluidSim) {
        for s in &self.sources {
            sim.add_density(s.x, s.y, s.density);
            sim.add_velocity(s.x, s.y, s.vx, s.vy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(n: usize) -> FluidSim {
        FluidSim::with_size(n, 0.0, 0.0, 0.1).unwrap()
    }

    #[test]
    fn test_rect_is_inclusive_and_order_independent() {
        let mut s = sim(16);
        ObstacleShape::Rect { x0: 5, y0: 6, x1: 3, y1: 4 }.stamp(&mut s);
        assert_eq!(s.obstacles().count(), 9);
        assert!(s.is_obstacle(3, 4));
        assert!(s.is_obstacle(5, 6));
        assert!(!s.is_obstacle(6, 6));
    }

    #[test]
    fn test_circle_shape() {
        let mut s = sim(32);
        ObstacleShape::Circle { cx: 16, cy: 16, radius: 3 }.stamp(&mut s);
        assert!(s.is_obstacle(16, 16));
        assert!(s.is_obstacle(19, 16));
        assert!(s.is_obstacle(16, 13));
        assert!(!s.is_obstacle(19, 19), "corner of bounding box is outside the circle");
        assert!(!s.is_obstacle(20, 16));
    }

    #[test]
    fn test_perimeter_shape() {
        let mut s = sim(10);
        ObstacleShape::Perimeter.stamp(&mut s);
        assert_eq!(s.obstacles().count(), 36);
        assert!(s.is_obstacle(0, 5));
        assert!(s.is_obstacle(9, 9));
        assert!(!s.is_obstacle(1, 1));
    }

    #[test]
    fn test_inject_sources_skips_obstacles() {
        let mut s = sim(16);
        let scene = Scene {
            obstacles: vec![ObstacleShape::Rect { x0: 8, y0: 8, x1: 8, y1: 8 }],
            sources: vec![
                Source { x: 4, y: 4, density: 2.0, vx: 1.0, vy: -1.0 },
                Source { x: 8, y: 8, density: 5.0, vx: 1.0, vy: 1.0 },
            ],
        };
        scene.apply_obstacles(&mut s);
        scene.inject_sources(&mut s);
        scene.inject_sources(&mut s);
        assert_eq!(s.density(4, 4), 4.0);
        assert_eq!(s.velocity(4, 4), (2.0, -2.0));
        assert_eq!(s.density(8, 8), 0.0);
    }

    #[test]
    fn test_scene_yaml() {
        let yaml = r#"
obstacles:
  - type: rect
    x0: 1
    y0: 2
    x1: 3
    y1: 4
  - type: circle
    cx: 10
    cy: 10
    radius: 2
  - type: perimeter
sources:
  - x: 5
    y: 6
    density: 10.0
    vx: 0.5
"#;
        let scene: Scene = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scene.obstacles.len(), 3);
        assert_eq!(scene.obstacles[0], ObstacleShape::Rect { x0: 1, y0: 2, x1: 3, y1: 4 });
        assert_eq!(scene.obstacles[2], ObstacleShape::Perimeter);
        assert_eq!(scene.sources[0], Source { x: 5, y: 6, density: 10.0, vx: 0.5, vy: 0.0 });
    }
}
