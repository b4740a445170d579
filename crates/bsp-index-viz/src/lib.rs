//! Shared visualization utilities for BSP index examples.

use std::hash::{Hash, Hasher};

use bsp_index::{BspNode, HRect, LeafVisitor, Point};
use macroquad::prelude::*;
use macroquad::rand::gen_range;

pub mod navigator;
pub use navigator::TreeNavigator;

/// Radius of an ordinary point marker, in pixels.
pub const POINT_RADIUS: f32 = 3.0;

/// Generates a deterministic color from a leaf bucket's coordinates using
/// hashing. This keeps a bucket's color stable across frames.
pub fn bucket_color(points: &[Point]) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for point in points {
        for coordinate in point.iter() {
            coordinate.to_bits().hash(&mut hasher);
        }
    }
    let hash = hasher.finish();

    // Extract RGB from hash bytes
    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Ensure colors aren't too dark by adding a minimum brightness
    let r = r.max(40);
    let g = g.max(40);
    let b = b.max(40);

    Color::from_rgba(r, g, b, 255)
}

/// Draws a single point as a filled circle. Only the first two
/// coordinates are rendered.
pub fn draw_point(point: &Point, radius: f32, color: Color) {
    draw_circle(point[0] as f32, point[1] as f32, radius, color);
}

/// Draws the outline of an axis-aligned box (first two dimensions).
pub fn draw_hrect(rect: &HRect, thickness: f32, color: Color) {
    let x = rect.mins()[0] as f32;
    let y = rect.mins()[1] as f32;
    let w = (rect.maxs()[0] - rect.mins()[0]) as f32;
    let h = (rect.maxs()[1] - rect.mins()[1]) as f32;
    draw_rectangle_lines(x, y, w, h, thickness, color);
}

/// Visitor that renders each leaf bucket in its own color.
pub struct RenderVisitor;

impl LeafVisitor for RenderVisitor {
    fn visit(&mut self, points: &[Point]) {
        let color = bucket_color(points);
        for point in points {
            draw_point(point, POINT_RADIUS, color);
        }
    }
}

/// Draws every point in a subtree with a single color, leaves and all.
pub fn draw_subtree(node: &BspNode, radius: f32, color: Color) {
    for point in node.points() {
        draw_point(point, radius, color);
    }
    if let Some(first) = node.first() {
        draw_subtree(first, radius, color);
    }
    if let Some(second) = node.second() {
        draw_subtree(second, radius, color);
    }
}

/// Generates `count` 2D points uniformly scattered around a cluster
/// center.
pub fn generate_cluster(center: (f32, f32), spread: f32, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let x = center.0 + gen_range(-spread, spread);
            let y = center.1 + gen_range(-spread, spread);
            Point::from_row_slice(&[x as f64, y as f64])
        })
        .collect()
}

/// Generates several point clusters scattered across the screen area.
pub fn generate_clustered_scene(clusters: usize, points_per_cluster: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(clusters * points_per_cluster);
    for _ in 0..clusters {
        let center = (gen_range(100.0, 700.0), gen_range(100.0, 500.0));
        points.extend(generate_cluster(center, 60.0, points_per_cluster));
    }
    points
}
