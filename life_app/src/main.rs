// main.rs - Mana Life: spend mana to stamp patterns, then watch them evolve

use eframe::egui;
use life_core::{Config, ConfigError, FrameBuffer, Simulation, TokioScheduler};
use thiserror::Error;

mod ui;   // eframe::App impl
mod view; // colours and cell geometry

#[derive(Debug, Error)]
enum AppError {
    #[error("bad configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not start tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn main() {
    env_logger::init();
    log::info!("Mana Life starting up");

    if let Err(e) = run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    log::info!(
        "{}x{} grid, tick {:?}, placement {}",
        config.cols(),
        config.rows(),
        config.tick_period,
        if config.gated { "costs mana" } else { "free" }
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.display_width as f32 + 40.0,
            config.display_height as f32 + 200.0,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        "Mana Life",
        options,
        Box::new(move |cc| Box::new(ManaLife::new(config, runtime, cc.egui_ctx.clone()))),
    )?;
    Ok(())
}

/// The desktop host: turns egui input into simulation events and paints the
/// last rendered frame.
pub struct ManaLife {
    config: Config,
    sim: Simulation,
    scheduler: TokioScheduler,
    frame: FrameBuffer,
    /// Cell under the pointer as of the last frame.
    hovered: Option<(usize, usize)>,
    status: String,
    // Owns the timer tasks behind `scheduler`.
    _runtime: tokio::runtime::Runtime,
}

impl ManaLife {
    fn new(config: Config, runtime: tokio::runtime::Runtime, ctx: egui::Context) -> Self {
        let scheduler = TokioScheduler::new(runtime.handle().clone())
            .with_waker(move || ctx.request_repaint());
        let sim = Simulation::new(&config);
        let mut frame = FrameBuffer::new(config.cols(), config.rows());
        sim.render(&mut frame);

        Self {
            config,
            sim,
            scheduler,
            frame,
            hovered: None,
            status: String::from("Pick a pattern, click the grid to place it, then press Play."),
            _runtime: runtime,
        }
    }

    /// Runs every tick that came due since the last frame.
    fn deliver_ticks(&mut self) {
        for _ in 0..self.scheduler.take_due() {
            self.sim.on_tick(&mut self.scheduler, &mut self.frame);
        }
    }
}
