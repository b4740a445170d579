use bsp_index::{BspTree, HRect, Point};
use bsp_index_viz::{POINT_RADIUS, RenderVisitor, draw_hrect, draw_point, generate_clustered_scene};
use macroquad::prelude::*;
use macroquad::rand::srand;

const CLUSTERS: usize = 5;
const POINTS_PER_CLUSTER: usize = 50;
const LEAF_SIZE: usize = 8;

#[macroquad::main("BSP Range Query")]
async fn main() {
    srand(7);
    let points = generate_clustered_scene(CLUSTERS, POINTS_PER_CLUSTER);
    println!("Created {} points", points.len());

    let tree = BspTree::new(2, LEAF_SIZE, points).expect("tree configuration is valid");
    println!("BSP tree built: {} points, depth {}", tree.len(), tree.depth());

    let mut drag_start: Option<(f32, f32)> = None;
    let mut selection: Option<HRect> = None;

    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            drag_start = Some(mouse_position());
        }
        if let Some(start) = drag_start {
            let current = mouse_position();
            let a = Point::from_row_slice(&[start.0 as f64, start.1 as f64]);
            let b = Point::from_row_slice(&[current.0 as f64, current.1 as f64]);
            if let Ok(rect) = HRect::from_corners(&a, &b) {
                selection = Some(rect);
            }
            if is_mouse_button_released(MouseButton::Left) {
                drag_start = None;
            }
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));

        let mut renderer = RenderVisitor;
        tree.visit_leaves(&mut renderer);

        let mut match_count = 0;
        if let Some(rect) = &selection {
            draw_hrect(rect, 1.0, YELLOW);
            if let Ok(matches) = tree.range_query(rect) {
                match_count = matches.len();
                for point in matches {
                    draw_point(point, POINT_RADIUS + 2.0, YELLOW);
                }
            }
        }

        draw_text(
            &format!("BSP Range Query - Total: {} points", tree.len()),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Matches: {}", match_count),
            10.0,
            45.0,
            18.0,
            YELLOW,
        );
        draw_text(
            "Drag the mouse to select a region",
            10.0,
            65.0,
            16.0,
            DARKGRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 85.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
