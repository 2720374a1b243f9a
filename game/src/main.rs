mod config;
mod input;
mod physics;
mod render;
mod ship;
mod tuning;

use crate::config::*;
use crate::input::Controls;
use crate::physics::Physics;
use crate::render::Scene;
use crate::ship::Ship;
use crate::tuning::ShipTuning;
use backend::system::System;
use resources::sprite_set::SpriteSet;
use tracing::{error, info};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() {
    init_tracing();

    let mut system = match System::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT) {
        Ok(s) => s,
        Err(msg) => panic!("Game initialization failure: {msg}"),
    };
    system.set_frame_rate(FRAME_RATE);
    backend::glutils::log_opengl_info();

    let sprites = match SpriteSet::load() {
        Ok(s) => s,
        Err(msg) => panic!("Asset loading failure: {msg}"),
    };
    let scene = match Scene::new(&sprites, WINDOW_WIDTH, WINDOW_HEIGHT) {
        Ok(s) => s,
        Err(msg) => panic!("Game initialization failure: {msg}"),
    };
    info!("assets loaded");

    // SDL stays on the main thread; physics runs on the runtime's workers.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(PHYSICS_WORKER_THREADS)
        .thread_name("physics")
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => panic!("Game initialization failure: {e}"),
    };

    let tuning = ShipTuning::default();
    let physics = Physics::spawn(runtime.handle(), Ship::new(&tuning), tuning.tick_interval);

    let (r, g, b) = CLEAR_COLOR;
    while system.process_io_events() {
        let controls = Controls::read(&system);
        for cmd in controls.commands() {
            physics.send(cmd);
        }

        let snapshot = physics.snapshot();
        system.clear_screen(r, g, b);
        scene.draw(&snapshot.ship, &controls, system.center());
        system.draw_to_screen();
    }

    info!(ticks = physics.snapshot().tick, "window closed");
    match runtime.block_on(physics.shutdown()) {
        Ok(ship) => info!(
            x = ship.position.x,
            y = ship.position.y,
            heading = ship.heading,
            "final ship state"
        ),
        Err(e) => error!(error = %e, "physics did not stop cleanly"),
    }
}
