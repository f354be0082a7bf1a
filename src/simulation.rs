//! Window, event loop and the fixed-rate tick.

use crate::config::SimConfig;
use crate::draw::DrawList;
use crate::error::SimulationError;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::time::{FrameLimiter, Time};
use crate::world::{TickStats, World};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// The particle animation.
///
/// Configure with method chaining, then call `.run()` to open the window.
/// `run` blocks until the window is closed.
///
/// ```ignore
/// Simulation::new()
///     .with_config(SimConfig::default().with_seed(7))
///     .run()?;
/// ```
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        log::info!(
            "starting {}x{} \"{}\" at {} fps",
            self.config.width,
            self.config.height,
            self.config.title,
            self.config.target_fps
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => {
                log::info!("window closed after {} ticks", app.time.frame());
                Ok(())
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown in the corner of the canvas.
pub fn hud_text(count: usize) -> String {
    format!("Particles: {}", count)
}

/// What the loop does after a frame fails to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    Reconfigure,
    SkipFrame,
}

fn recover(error: wgpu::SurfaceError) -> Result<Recovery, SimulationError> {
    match error {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Ok(Recovery::Reconfigure),
        wgpu::SurfaceError::OutOfMemory => Err(SimulationError::Render(error)),
        _ => Ok(Recovery::SkipFrame),
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    world: World,
    draw_list: DrawList,
    input: Input,
    time: Time,
    limiter: FrameLimiter,
    last_stats: TickStats,
    error: Option<SimulationError>,
    #[cfg(not(feature = "egui"))]
    shown_count: Option<usize>,
}

impl App {
    fn new(config: SimConfig) -> Self {
        let limiter = FrameLimiter::new(config.frame_budget());
        Self {
            window: None,
            gpu_state: None,
            world: World::new(config),
            draw_list: DrawList::new(),
            input: Input::new(),
            time: Time::new(),
            limiter,
            last_stats: TickStats::default(),
            error: None,
            #[cfg(not(feature = "egui"))]
            shown_count: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SimulationError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) else {
            return;
        };

        self.limiter.begin_tick(Instant::now());
        if self.time.update() {
            log::debug!(
                "{:.1} fps, {} particles, {} lines",
                self.time.fps(),
                self.last_stats.alive,
                self.last_stats.lines
            );
        }

        let stats = self.world.tick(self.input.pointer(), &mut self.draw_list);
        let hud = hud_text(stats.alive);

        #[cfg(not(feature = "egui"))]
        {
            if self.shown_count != Some(stats.alive) {
                window.set_title(&format!("{} | {}", self.world.config().title, hud));
                self.shown_count = Some(stats.alive);
            }
        }

        let result = gpu_state.render(window, &self.draw_list, &hud);
        self.last_stats = stats;

        if let Err(e) = result {
            match recover(e.clone()) {
                Ok(Recovery::Reconfigure) => {
                    if let Some(gpu_state) = &mut self.gpu_state {
                        gpu_state.reconfigure();
                    }
                }
                Ok(Recovery::SkipFrame) => log::warn!("render error: {:?}", e),
                Err(fatal) => self.fail(event_loop, fatal),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.world.config();
        let window_attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);
        let canvas = config.bounds();

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        self.input.set_scale_factor(window.scale_factor());

        match pollster::block_on(GpuState::new(window.clone(), canvas)) {
            Ok(gpu_state) => {
                self.gpu_state = Some(gpu_state);
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, e.into()),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
            gpu_state.on_window_event(window, &event);
        }
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if self.limiter.is_due(Instant::now()) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.deadline()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_text() {
        assert_eq!(hud_text(0), "Particles: 0");
        assert_eq!(hud_text(123), "Particles: 123");
    }

    #[test]
    fn test_out_of_memory_is_fatal() {
        assert!(matches!(
            recover(wgpu::SurfaceError::OutOfMemory),
            Err(SimulationError::Render(wgpu::SurfaceError::OutOfMemory))
        ));
        assert_eq!(recover(wgpu::SurfaceError::Lost).ok(), Some(Recovery::Reconfigure));
        assert_eq!(recover(wgpu::SurfaceError::Outdated).ok(), Some(Recovery::Reconfigure));
        assert_eq!(recover(wgpu::SurfaceError::Timeout).ok(), Some(Recovery::SkipFrame));
    }

    #[test]
    fn test_builder() {
        let sim = Simulation::new().with_config(SimConfig::default().with_seed(9));
        assert_eq!(sim.config().seed, Some(9));
        assert_eq!(sim.config().width, 800);
        assert_eq!(sim.config().title, "Particle Animation");
    }
}
