use macroquad::prelude::*;

#[macroquad::main("BSP Index Visualization")]
async fn main() {
    loop {
        clear_background(BLACK);

        draw_text("BSP Index Visualization", 20.0, 40.0, 30.0, WHITE);
        draw_text(
            "Run the `clusters` or `range_query` binaries for the demos",
            20.0,
            70.0,
            20.0,
            GRAY,
        );

        next_frame().await
    }
}
