use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::*;
use toroidal_life::{
    Grid, ModeController, Outcome, Screen, Settings, TickTimer,
    input, rendering, ui,
};

fn settings() -> Settings {
    Settings::parse().sanitized()
}

fn window_conf() -> Conf {
    let (width, height) = settings().window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn log_hints(screen: Screen) {
    match screen {
        Screen::AutoRun => info!("press R to restart the grid"),
        Screen::Editable(_) => {
            info!("left click to draw or remove a cell");
            info!("space to run or pause the simulation");
        }
        Screen::Menu => {}
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = settings();
    if let Err(err) = settings.validate() {
        error!("cannot start: {}", err);
        return;
    }
    let seed = settings.resolve_seed();
    info!(
        "{}x{} grid, {} px cells, {} gen/s, seed {}",
        settings.rows, settings.cols, settings.cell_size, settings.fps, seed
    );

    // Window close goes back to the menu first
    prevent_quit();

    let mut controller = ModeController::new(settings.rows, settings.cols, seed)
        .with_parallel_threshold(settings.parallel_threshold);
    let mut timer = TickTimer::new(settings.fps);

    loop {
        let mouse_pos = mouse_position();
        let menu = ui::menu_buttons(screen_width(), screen_height());
        let screen = controller.screen();
        let dimensions = controller.grid().map_or((0, 0), Grid::dimensions);

        // All of this frame's edits land before the frame's generation step
        let commands = input::collect_commands(screen, &menu, mouse_pos, settings.cell_size, dimensions);
        for command in commands {
            match controller.handle(command) {
                Ok(Outcome::Exit) => return,
                Ok(Outcome::Continue) => {}
                Err(err) => warn!("rejected {:?}: {}", command, err),
            }
        }

        if controller.screen() != screen {
            timer.reset();
            log_hints(controller.screen());
        }

        if timer.advance(get_frame_time()) {
            controller.tick();
        }

        rendering::draw_frame(&controller, &menu, mouse_pos, settings.cell_size);

        next_frame().await;
    }
}
