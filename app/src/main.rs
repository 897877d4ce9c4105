use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;

use afterglow_core::{GridDims, RandomPicker, WallClock};

use session::{GameKind, GameSession};

mod session;
mod theme;

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;
const TARGET_HZ: f32 = 60.0;

/// Reaction and memory minigames on a grid of cells.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Which minigame to run.
    #[arg(short, long, value_enum, default_value = "sequence")]
    game: GameKind,
    /// Seed for the pattern RNG; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Grid dimensions expressed as COLSxROWS (for example 4x4).
    #[arg(
        short = 's',
        long = "size",
        value_name = "COLSxROWS",
        value_parser = parse_grid_size
    )]
    size: Option<GridDims>,
}

fn parse_grid_size(value: &str) -> std::result::Result<GridDims, String> {
    let (cols, rows) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected COLSxROWS, got '{}'", value))?;
    let cols = cols.trim().parse::<u8>().map_err(|err| err.to_string())?;
    let rows = rows.trim().parse::<u8>().map_err(|err| err.to_string())?;
    Ok((cols, rows))
}

fn window_conf() -> Conf {
    Conf {
        window_title: "afterglow".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();
    let args = CliArgs::parse();

    if let Err(err) = run(args).await {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<()> {
    let seed = args
        .seed
        .unwrap_or_else(|| macroquad::miniquad::date::now() as u64);
    log::info!("Pattern seed {}", seed);
    let mut picker = RandomPicker::new(seed);

    let viewport = (screen_width(), screen_height());
    let mut session = GameSession::new(args.game, args.size, viewport)
        .context("invalid game configuration")?;

    let clock = WallClock::start();
    let frame_budget = Duration::from_secs_f32(1.0 / TARGET_HZ);

    loop {
        let frame_started = Instant::now();
        let now = clock.now_ms();

        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }
        if is_key_pressed(KeyCode::R) && session.is_over() {
            session.restart(now);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            session.click(mouse_position());
        }

        session.tick(now, &mut picker);

        clear_background(BLACK);
        session.draw(now);

        // vsync usually paces us; sleep off the remainder when it does not
        let spent = frame_started.elapsed();
        if spent < frame_budget {
            std::thread::sleep(frame_budget - spent);
        }
        next_frame().await;
    }

    Ok(())
}
