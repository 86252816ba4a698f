mod renderer;

use rand::SeedableRng;
use renderer::Renderer;
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};
use zombiesim::constants::*;
use zombiesim::{GridError, SimRng, SimulationConfig, SimulationGrid};

// --- Host State ---

/// Owns the grid and paces generations. The renderer only ever gets `&grid`.
struct SimulationHost {
    grid: SimulationGrid,
    config: SimulationConfig,
    tick_interval: f32,
    time_accumulator: f32,
    is_paused: bool,
}

impl SimulationHost {
    fn new(config: SimulationConfig) -> Result<Self, GridError> {
        let grid = Self::populate(&config)?;
        Ok(Self {
            grid,
            tick_interval: config
                .tick_interval_secs
                .clamp(MIN_TICK_INTERVAL_SECS, MAX_TICK_INTERVAL_SECS),
            config,
            time_accumulator: 0.0,
            is_paused: false,
        })
    }

    /// Init, then walls, then population. Walls must go first so placement skips them.
    fn populate(config: &SimulationConfig) -> Result<SimulationGrid, GridError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        };
        let mut grid = SimulationGrid::new(config.grid_width, config.grid_height, rng)?;
        let walls = &config.walls;
        grid.build_walls(
            walls.count,
            walls.min_length,
            walls.max_length,
            walls.thickness,
        );
        grid.randomize(config.zombies, config.survivors)?;
        let census = grid.census();
        log::info!(
            "Populated {}x{} grid: {} zombies, {} survivors, {} wall cells",
            grid.width(),
            grid.height(),
            census.zombies,
            census.survivors,
            census.walls
        );
        Ok(grid)
    }

    fn update(&mut self, delta_time: f32) {
        if self.is_paused {
            return;
        }
        self.time_accumulator += delta_time;
        let mut ticks = 0;
        while self.time_accumulator >= self.tick_interval {
            self.time_accumulator -= self.tick_interval;
            if ticks == MAX_TICKS_PER_FRAME {
                // Drop the backlog instead of spiralling.
                self.time_accumulator = 0.0;
                break;
            }
            self.grid.next_generation();
            ticks += 1;

            let generation = self.grid.generation();
            if generation % CENSUS_LOG_INTERVAL_GENERATIONS == 0 {
                let census = self.grid.census();
                log::debug!(
                    "Generation {}: {} zombies, {} survivors",
                    generation,
                    census.zombies,
                    census.survivors
                );
            }
        }
    }

    fn adjust_speed(&mut self, faster: bool) {
        self.tick_interval = if faster {
            (self.tick_interval / TICK_INTERVAL_ADJUST_FACTOR).max(MIN_TICK_INTERVAL_SECS)
        } else {
            (self.tick_interval * TICK_INTERVAL_ADJUST_FACTOR).min(MAX_TICK_INTERVAL_SECS)
        };
        log::info!("Tick interval: {:.3}s", self.tick_interval);
    }

    fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        self.time_accumulator = 0.0;
        log::info!(
            "Simulation {}",
            if self.is_paused { "paused" } else { "resumed" }
        );
    }

    fn restart(&mut self) {
        log::info!("Restarting simulation...");
        match Self::populate(&self.config) {
            Ok(grid) => {
                self.grid = grid;
                self.time_accumulator = 0.0;
                self.is_paused = false;
            }
            Err(err) => log::error!("Restart failed, keeping current grid: {}", err),
        }
    }
}

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SimulationConfig::new();
    log::info!(
        "Starting {}x{} grid, {} zombies, {} survivors, {} walls, seed {:?}",
        config.grid_width,
        config.grid_height,
        config.zombies,
        config.survivors,
        config.walls.count,
        config.seed
    );
    let mut host = SimulationHost::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("ZombieSim")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        host.grid.width(),
        host.grid.height(),
    ))?;

    let mut last_update_time = Instant::now();
    let mut last_fps_update_time = Instant::now();
    let mut frames_since_last_fps_update = 0;
    let mut current_fps = 0.0;

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::AboutToWait => {
                let now = Instant::now();
                let delta_time = now.duration_since(last_update_time).as_secs_f32();
                last_update_time = now;
                host.update(delta_time);
                window.request_redraw();
            }
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::ScaleFactorChanged { .. } => renderer.resize(window.inner_size()),
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed && !key_event.repeat {
                        match key_event.physical_key {
                            PhysicalKey::Code(KeyCode::ArrowUp) => host.adjust_speed(true),
                            PhysicalKey::Code(KeyCode::ArrowDown) => host.adjust_speed(false),
                            PhysicalKey::Code(KeyCode::Space) => host.toggle_pause(),
                            PhysicalKey::Code(KeyCode::KeyR) => host.restart(),
                            PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                            _ => {}
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    frames_since_last_fps_update += 1;
                    let now = Instant::now();
                    let elapsed_secs = now.duration_since(last_fps_update_time).as_secs_f64();
                    if elapsed_secs >= FPS_UPDATE_INTERVAL_SECS {
                        current_fps = frames_since_last_fps_update as f64 / elapsed_secs;
                        last_fps_update_time = now;
                        frames_since_last_fps_update = 0;
                    }

                    match renderer.render(&host.grid, &host.config.palette) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.reconfigure()
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("WGPU Error: OutOfMemory");
                            elwt.exit();
                        }
                        Err(e) => log::warn!("WGPU Error: {:?}", e),
                    }

                    let census = host.grid.census();
                    let paused_text = if host.is_paused { " [PAUSED]" } else { "" };
                    window.set_title(&format!(
                        "ZombieSim - Gen: {} - Z: {}, S: {} - Tick: {:.3}s - FPS: {:.1}{}",
                        host.grid.generation(),
                        census.zombies,
                        census.survivors,
                        host.tick_interval,
                        current_fps,
                        paused_text
                    ));
                }
                _ => {}
            },
            _ => {}
        }
    })?;
    Ok(())
}
