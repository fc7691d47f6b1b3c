//! Grid Dash entry point
//!
//! Maps window events to simulation input and runs the fixed-timestep
//! game loop.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use grid_dash::Tuning;
use grid_dash::consts::*;
use grid_dash::renderer::{RenderState, build_scene, view_projection};
use grid_dash::sim::{FrameInput, GameEvent, WorldState, tick};

/// Application state holding the world and the render surface
struct App {
    world: WorldState,
    tuning: Tuning,
    input: FrameInput,
    accumulator: f32,
    last_frame: Option<Instant>,
    last_cursor: Option<(f64, f64)>,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
}

impl App {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            world: WorldState::with_tuning(seed, &tuning),
            tuning,
            input: FrameInput::default(),
            accumulator: 0.0,
            last_frame: None,
            last_cursor: None,
            window: None,
            render_state: None,
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::KeyA => self.input.step_x += 1,
            KeyCode::KeyD => self.input.step_x -= 1,
            KeyCode::KeyW => self.input.step_z += 1,
            KeyCode::KeyS => self.input.step_z -= 1,
            KeyCode::Space => self.input.jump = true,
            KeyCode::KeyC => self.input.cycle_camera = true,
            KeyCode::KeyP => self.input.toggle_sweep = true,
            KeyCode::KeyF => self.input.fire = true,
            KeyCode::KeyR => self.input.flip_facing = true,
            KeyCode::Equal | KeyCode::NumpadAdd => self.input.speed_steps += 1,
            KeyCode::Minus | KeyCode::NumpadSubtract => self.input.speed_steps -= 1,
            KeyCode::ArrowUp => self.input.pan_x -= PAN_STEP,
            KeyCode::ArrowDown => self.input.pan_x += PAN_STEP,
            KeyCode::ArrowRight => self.input.pan_z -= PAN_STEP,
            KeyCode::ArrowLeft => self.input.pan_z += PAN_STEP,
            KeyCode::KeyQ | KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }

    /// Run simulation ticks
    fn update(&mut self, event_loop: &ActiveEventLoop, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.world, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = FrameInput::default();

            for event in events {
                match event {
                    GameEvent::ReachedGoal { obstacle_count } => {
                        log::info!(
                            "Level {}: crossed the grid, {} obstacles now in play",
                            self.world.level,
                            obstacle_count
                        );
                    }
                    GameEvent::HitObstacle => {
                        log::info!("Hit an obstacle on level {}, game over", self.world.level);
                        event_loop.exit();
                    }
                }
            }
        }
    }

    /// Render the current frame
    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let vertices = build_scene(&self.world);
        let view = self.world.camera.view(self.world.player.position());
        let (width, height) = render_state.size;
        let view_proj = view_projection(&view, width, height, render_state.zoom);

        match render_state.render(&vertices, view_proj) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_state.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes().with_title("Grid Dash");
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = pollster::block_on(RenderState::new(surface, &adapter, width, height));
        self.render_state = Some(render_state);
        self.window = Some(window.clone());
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // Key repeat is ignored; every action is one press, one step
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(event_loop, code);
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                self.input.cycle_camera = true;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                if scroll != 0.0 {
                    if let Some(render_state) = self.render_state.as_mut() {
                        render_state.apply_zoom(scroll > 0.0);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((last_x, last_y)) = self.last_cursor {
                    let dx = (position.x - last_x) as f32;
                    let dy = (position.y - last_y) as f32;
                    self.input.look_dx += dx * self.tuning.look_sensitivity;
                    self.input.look_dy += dy * self.tuning.look_sensitivity;
                }
                self.last_cursor = Some((position.x, position.y));
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = match self.last_frame {
                    Some(last) => now.duration_since(last).as_secs_f32(),
                    None => SIM_DT,
                };
                self.last_frame = Some(now);

                self.update(event_loop, dt);
                self.render(event_loop);

                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let tuning = Tuning::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Grid Dash starting with seed: {}", seed);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = App::new(seed, tuning);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
    }
}
