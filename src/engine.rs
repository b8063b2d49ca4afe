use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::assets::Assets;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::scene::{Game, SceneAction};
use crate::world::World;

// ── FrameClock ──────────────────────────────────────────────────────────────

/// Caps the loop at a fixed number of iterations per second.
///
/// There is no catch-up: if a frame runs late the next deadline is measured
/// from "now" instead of replaying the missed frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self { interval: Duration::from_secs(1) / fps.max(1), next: None }
    }

    pub fn interval(&self) -> Duration { self.interval }

    /// When the next frame is due, if one has been scheduled.
    pub fn deadline(&self) -> Option<Instant> { self.next }

    /// True if a frame is due at `now`; schedules the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(due) if now < due => false,
            Some(due) if now < due + self.interval => {
                self.next = Some(due + self.interval);
                true
            }
            _ => {
                self.next = Some(now + self.interval);
                true
            }
        }
    }
}

// ── run ─────────────────────────────────────────────────────────────────────

/// Open the window and run the splash + game loop until the player quits.
///
/// The window and GPU context are created inside the event loop and dropped
/// before this returns, on every exit path.
pub fn run(config: GameConfig, assets: Assets, world: World) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| GameError::Graphics(format!("cannot create event loop: {e}")))?;

    let game = Game::new(world, &config);
    let mut app = App {
        clock: FrameClock::new(config.fps),
        config,
        assets,
        game,
        input: InputState::new(),
        renderer: None,
        failure: None,
    };

    event_loop
        .run_app(&mut app)
        .map_err(|e| GameError::Graphics(format!("event loop failed: {e}")))?;

    let failure = app.failure.take();
    drop(app);
    tracing::info!("window closed");
    failure.map_or(Ok(()), Err)
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: GameConfig,
    assets: Assets,
    game: Game,
    input: InputState,
    clock: FrameClock,
    renderer: Option<Renderer>,
    /// Fatal error that stopped the loop; reported by `run`.
    failure: Option<GameError>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: GameError) {
        self.failure = Some(err);
        self.renderer = None;
        event_loop.exit();
    }

    fn create_renderer(&self, event_loop: &ActiveEventLoop) -> Result<Renderer> {
        let attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.viewport_width,
                self.config.viewport_height,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| GameError::Graphics(format!("cannot create window: {e}")))?,
        );
        pollster::block_on(Renderer::new(window, &self.assets, &self.config))
    }

    /// One loop iteration: apply queued input, then draw.
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        let events = self.input.drain_events();
        if self.game.update(events) == SceneAction::Quit {
            self.renderer = None;
            event_loop.exit();
            return;
        }

        let Some(renderer) = self.renderer.as_mut() else { return };
        match renderer.render(&self.game.frame()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.window.inner_size();
                renderer.resize(size);
            }
            Err(e) => tracing::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        match self.create_renderer(event_loop) {
            Ok(renderer) => {
                tracing::info!(fps = self.config.fps, "splash screen");
                self.renderer = Some(renderer);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_ref() else { return };

        if self.clock.poll(Instant::now()) {
            renderer.window.request_redraw();
        }
        if let Some(deadline) = self.clock.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.input.push_quit();
                self.step(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }

            WindowEvent::MouseInput { button, state: ElementState::Pressed, .. } => {
                self.input.press_mouse(button);
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match physical_key {
                PhysicalKey::Code(code) => self.input.press_key(code),
                PhysicalKey::Unidentified(_) => self.input.press_unidentified_key(),
            },

            WindowEvent::RedrawRequested => self.step(event_loop),

            _ => {}
        }
    }
}
