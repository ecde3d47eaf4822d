mod terminal;

pub use terminal::{NullDisplay, TerminalDisplay};

use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;

/// Endpoints of the plasma colormap, used as a two-colour heatmap
const DEAD_COLOR: Color = Color::new(13.0 / 255.0, 8.0 / 255.0, 135.0 / 255.0, 1.0);
const ALIVE_COLOR: Color = Color::new(240.0 / 255.0, 249.0 / 255.0, 33.0 / 255.0, 1.0);

const TITLE_HEIGHT: f32 = 40.0;
const MARGIN: f32 = 10.0;

/// Window settings sized so each cell starts out `cell_size` pixels square
pub fn window_conf(grid: &Grid, cell_size: f32) -> Conf {
    let (rows, cols) = grid.dimensions();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (cols as f32 * cell_size + 2.0 * MARGIN).max(320.0) as i32,
        window_height: (rows as f32 * cell_size + TITLE_HEIGHT + 2.0 * MARGIN).max(240.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Largest square cell that fits the current window
fn fit_cell_size(grid: &Grid) -> f32 {
    let (rows, cols) = grid.dimensions();
    let width = (screen_width() - 2.0 * MARGIN) / cols as f32;
    let height = (screen_height() - TITLE_HEIGHT - 2.0 * MARGIN) / rows as f32;
    width.min(height).max(1.0)
}

/// Draw the grid as a heatmap of square cells below the title band
pub fn draw_heatmap(grid: &Grid) {
    let cell_size = fit_cell_size(grid);
    let (rows, cols) = grid.dimensions();
    let origin_x = (screen_width() - cols as f32 * cell_size) / 2.0;
    let origin_y = TITLE_HEIGHT + MARGIN;

    draw_rectangle(origin_x, origin_y, cols as f32 * cell_size, rows as f32 * cell_size, DEAD_COLOR);
    for (row, col, cell) in grid.iter_cells() {
        if cell.is_alive() {
            draw_rectangle(
                origin_x + col as f32 * cell_size,
                origin_y + row as f32 * cell_size,
                cell_size,
                cell_size,
                ALIVE_COLOR,
            );
        }
    }
}

/// Centered title text above the heatmap
pub fn draw_title(title: &str) {
    let size = 24.0;
    let dims = measure_text(title, None, size as u16, 1.0);
    draw_text(title, (screen_width() - dims.width) / 2.0, TITLE_HEIGHT - 10.0, size, BLACK);
}

/// Frame loop for the window backend, the frame-driven counterpart of
/// `application::run`.
/// Generations advance on `Simulation::tick`; the last frame stays up until
/// the window is closed or Escape is pressed.
pub async fn play(mut sim: Simulation) {
    if sim.is_finished() {
        return;
    }

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        sim.tick(get_frame_time());

        clear_background(WHITE);
        draw_heatmap(sim.grid());
        draw_title(&sim.title());

        next_frame().await;
    }
}
