//! Terminal Lane Hopper runner (default binary).
//!
//! Fixed-timestep loop: read at most one key, redraw the whole grid, wait out
//! the rest of the frame, then advance the simulation. When the game stops the
//! final frame stays up until Enter is pressed.

mod config;
mod logging;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};

use lane_hopper::core::{GameConfig, GameState};
use lane_hopper::input::{poll_action, wait_for_confirm};
use lane_hopper::term::{
    restore_terminal, FramePacer, FrameBuffer, GameView, TerminalRenderer, Viewport,
};
use lane_hopper::types::FRAME_MS;

use crate::config::RunConfig;

fn main() -> Result<()> {
    let run_config = RunConfig::from_env();
    logging::init(run_config.log_path.as_deref())?;
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &run_config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, run_config: &RunConfig) -> Result<()> {
    let mut game = GameState::new(GameConfig::default().with_seed(run_config.seed))?;

    let view = GameView::new();
    let viewport = Viewport::fitting(&game);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut pacer = FramePacer::new(FRAME_MS as u64);
    let clock = Instant::now();

    while game.running() {
        pacer.begin(elapsed_ms(clock));

        if let Some(action) = poll_action()? {
            game.apply_action(action);
            if !game.running() {
                break;
            }
        }

        view.render_into(&game, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
        thread::sleep(Duration::from_millis(pacer.delay_ms(elapsed_ms(clock))));

        game.update();
    }

    info!(
        "game over after {} ticks: {:?}, score {}",
        game.ticks(),
        game.status(),
        game.score()
    );

    // Game-over screen: the final state plus the GAME OVER line.
    view.render_into(&game, viewport, &mut fb);
    term.draw_swap(&mut fb)?;
    wait_for_confirm()
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

fn elapsed_ms(clock: Instant) -> u64 {
    clock.elapsed().as_millis() as u64
}
