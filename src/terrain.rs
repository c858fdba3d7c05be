use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;

const MIN_HEIGHT: f32 = 10.0;
const MAX_HEIGHT: f32 = 250.0;

/// Static ground geometry: a polyline strip ordered by increasing x.
///
/// Read-only for the lifetime of a session; the simulation queries it for
/// the nearest surface point and the surface height under the lander.
#[derive(Debug, Clone)]
pub struct Terrain {
    points: Vec<Vec2>,
}

impl Terrain {
    /// Builds a strip from explicit vertices. Points must be ordered by
    /// increasing x and contain at least two entries.
    pub fn from_points(points: Vec<Vec2>) -> Self {
        assert!(points.len() >= 2);
        debug_assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
        Self { points }
    }

    /// Generates a strip by midpoint displacement: start from a handful of
    /// anchor points, then repeatedly insert displaced midpoints, halving
    /// the displacement range each pass.
    pub fn generate(config: &GameConfig) -> Self {
        let mut rng = match config.terrain_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let width = config.terrain_width;
        let mut points: Vec<Vec2> = (0..=4)
            .map(|i| {
                let x = width * i as f32 / 4.0;
                Vec2::new(x, rng.gen_range(40.0..160.0))
            })
            .collect();

        let mut range = config.terrain_roughness;
        for _ in 0..config.terrain_detail {
            let mut refined = Vec::with_capacity(points.len() * 2 - 1);
            for pair in points.windows(2) {
                let mid = (pair[0] + pair[1]) / 2.0;
                let offset = if range > 0.0 {
                    rng.gen_range(-range..range)
                } else {
                    0.0
                };
                let y = (mid.y + offset).clamp(MIN_HEIGHT, MAX_HEIGHT);
                refined.push(pair[0]);
                refined.push(Vec2::new(mid.x, y));
            }
            refined.push(*points.last().unwrap());
            points = refined;
            range /= 2.0;
        }

        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Nearest point on the terrain polyline to `p`.
    pub fn find_closest_point(&self, p: Vec2) -> Vec2 {
        let mut best = self.points[0];
        let mut best_dist = f32::INFINITY;
        for pair in self.points.windows(2) {
            let candidate = closest_point_on_segment(pair[0], pair[1], p);
            let dist = candidate.distance_squared(p);
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        best
    }

    /// Surface height directly below/above x, interpolated along the segment
    /// containing x. Outside the strip, the nearest endpoint height.
    pub fn find_height_at_x(&self, x: f32) -> f32 {
        if x <= self.points[0].x {
            return self.points[0].y;
        }
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if x <= b.x {
                if b.x == a.x {
                    return a.y.max(b.y);
                }
                let t = (x - a.x) / (b.x - a.x);
                return a.y + t * (b.y - a.y);
            }
        }
        self.points.last().unwrap().y
    }

    pub fn min_x(&self) -> f32 {
        self.points[0].x
    }

    pub fn max_x(&self) -> f32 {
        self.points.last().unwrap().x
    }

    pub fn min_y(&self) -> f32 {
        self.points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min)
    }

    pub fn max_y(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + t * ab
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(width: f32, height: f32) -> Terrain {
        Terrain::from_points(vec![Vec2::new(0.0, height), Vec2::new(width, height)])
    }

    #[test]
    fn closest_point_on_flat_strip_is_directly_below() {
        let terrain = flat(100.0, 20.0);
        let closest = terrain.find_closest_point(Vec2::new(42.0, 80.0));
        assert_eq!(closest, Vec2::new(42.0, 20.0));
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let terrain = flat(100.0, 20.0);
        let closest = terrain.find_closest_point(Vec2::new(-30.0, 20.0));
        assert_eq!(closest, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn closest_point_prefers_nearer_segment() {
        let terrain = Terrain::from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 100.0),
            Vec2::new(100.0, 0.0),
        ]);
        let closest = terrain.find_closest_point(Vec2::new(50.0, 120.0));
        assert_eq!(closest, Vec2::new(50.0, 100.0));
    }

    #[test]
    fn height_interpolates_along_segment() {
        let terrain = Terrain::from_points(vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0)]);
        assert_eq!(terrain.find_height_at_x(50.0), 25.0);
        assert_eq!(terrain.find_height_at_x(-10.0), 0.0);
        assert_eq!(terrain.find_height_at_x(200.0), 50.0);
    }

    #[test]
    fn generated_strip_spans_configured_width() {
        let config = GameConfig {
            terrain_seed: Some(7),
            ..GameConfig::default()
        };
        let terrain = Terrain::generate(&config);
        assert_eq!(terrain.min_x(), 0.0);
        assert_eq!(terrain.max_x(), config.terrain_width);
        assert!(terrain.points().windows(2).all(|w| w[0].x <= w[1].x));
        assert!(terrain.min_y() >= MIN_HEIGHT);
        assert!(terrain.max_y() <= MAX_HEIGHT);
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let config = GameConfig {
            terrain_seed: Some(99),
            ..GameConfig::default()
        };
        let a = Terrain::generate(&config);
        let b = Terrain::generate(&config);
        assert_eq!(a.points(), b.points());
    }
}
