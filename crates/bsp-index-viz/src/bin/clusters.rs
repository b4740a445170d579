use bsp_index::BspTree;
use bsp_index_viz::{RenderVisitor, TreeNavigator, generate_clustered_scene};
use macroquad::prelude::*;
use macroquad::rand::srand;

const CLUSTERS: usize = 6;
const POINTS_PER_CLUSTER: usize = 40;
const LEAF_SIZE: usize = 8;

#[macroquad::main("BSP Point Clusters")]
async fn main() {
    srand(42);
    println!("Generating {} clusters...", CLUSTERS);
    let points = generate_clustered_scene(CLUSTERS, POINTS_PER_CLUSTER);
    let point_count = points.len();
    println!("Created {} points", point_count);

    println!("Building BSP tree...");
    let tree = BspTree::new(2, LEAF_SIZE, points).expect("tree configuration is valid");
    println!("BSP tree built: {} points, depth {}", tree.len(), tree.depth());

    let mut navigator = TreeNavigator::new();

    loop {
        navigator.update(&tree);

        clear_background(Color::from_rgba(20, 20, 30, 255));

        // Every leaf bucket in its own color.
        let mut renderer = RenderVisitor;
        tree.visit_leaves(&mut renderer);

        // The navigated subtree on top.
        navigator.render(&tree);

        draw_text(
            &format!("BSP Point Clusters - Total: {} points", tree.len()),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Tree depth: {} | Leaf size: {}", tree.depth(), LEAF_SIZE),
            10.0,
            45.0,
            18.0,
            GRAY,
        );

        navigator.draw_ui(&tree, 70.0);

        draw_text(&format!("FPS: {}", get_fps()), 10.0, 155.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
