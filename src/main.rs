use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use virtual_gallery::camera::{Camera, MouseLook, MoveDirection};
use virtual_gallery::cli::Cli;
use virtual_gallery::collision;
use virtual_gallery::renderer::GalleryRenderer;
use virtual_gallery::scene::{create_gallery_scene, Scene};

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<GalleryRenderer>,
    scene: Scene,
    camera: Camera,
    mouse: MouseLook,
    captured: bool,
    grabbed: bool,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            scene: create_gallery_scene(),
            camera: Camera::new(),
            mouse: MouseLook::new(),
            captured: false,
            grabbed: false,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// One movement step: advance the camera, pin it to the walkable
    /// volume, then push it off any stand it walked into.
    fn step_camera(&mut self, direction: MoveDirection) {
        let previous = self.camera.position;
        self.camera.step(direction);
        let clamped = self.scene.room.clamp(self.camera.position);
        self.camera.position =
            collision::resolve_obstacles(&self.scene.obstacles, previous, clamped);
    }

    /// Mouse look stays active even when no grab mode is supported; the
    /// ungrabbed cursor then feeds absolute positions through `MouseLook`
    /// instead of raw device deltas.
    fn set_captured(&mut self, captured: bool) {
        let Some(window) = &self.window else { return };
        if captured {
            self.grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
                .map_err(|e| warn!("cursor grab failed: {e}"))
                .is_ok();
        } else {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                warn!("cursor release failed: {e}");
            }
            self.grabbed = false;
        }
        window.set_cursor_visible(!(captured && self.grabbed));
        self.captured = captured;
        // Drop the mouse reference point so the next sample does not jump.
        self.mouse.reset();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Virtual Gallery")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(GalleryRenderer::new(
                window.clone(),
                &self.scene,
                &self.cli.assets,
                self.cli.no_ui,
            )) {
                Ok(r) => r,
                Err(e) => {
                    error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.set_captured(true);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first, unless the pointer is captured
        // for mouse look.
        if !self.captured {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window, &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                let captured = self.captured;
                self.set_captured(!captured);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let Some(direction) = MoveDirection::from_key(&event) {
                        self.step_camera(direction);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // A grabbed cursor is pinned in place and reports a frozen
                // position here; its motion arrives as raw device deltas
                // instead. Absolute positions only drive the view when no
                // grab mode took.
                if self.captured && !self.grabbed {
                    if let Some((dx, dy)) =
                        self.mouse.delta(position.x as f32, position.y as f32)
                    {
                        self.camera.look(dx, dy);
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.update_fps(delta);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(&self.scene, &self.camera, window, self.fps) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(e) => error!("render error: {e}"),
                    }
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.captured && self.grabbed {
                self.camera.look_raw(dx as f32, dy as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("Virtual Gallery - Controls: WASD/arrows to move, mouse to look, Escape to release the cursor");
    event_loop.run_app(&mut app)?;

    Ok(())
}
