//! Wavefield - the animated hero background of the agency home page
//!
//! A grid of points rolls under layered traveling waves. Clicking the
//! surface drops a ripple that spreads outward and fades away.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavefield::camera::CameraSystem;
use wavefield::cli::Args;
use wavefield::field::WaveField;
use wavefield::overlay::{Overlay, PointerTarget};
use wavefield::params::{FixedCamera, OverlayLayout, RecordingConfig, RenderConfig};
use wavefield::rendering::RenderSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    field: WaveField,
    camera: CameraSystem,
    overlay: Overlay,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Input
    cursor: Option<PhysicalPosition<f64>>,

    // Time tracking
    start_time: Instant,
    frame_num: usize,
}

impl App {
    fn new(
        field: WaveField,
        render_config: RenderConfig,
        recording_config: Option<RecordingConfig>,
    ) -> Self {
        let camera = CameraSystem::new(FixedCamera::default(), &render_config);
        let overlay = Overlay::new(
            OverlayLayout::default(),
            render_config.window_width,
            render_config.window_height,
        );

        Self {
            window: None,
            render_system: None,
            field,
            camera,
            overlay,
            render_config,
            recording_config,
            cursor: None,
            start_time: Instant::now(),
            frame_num: 0,
        }
    }

    /// Field clock: wall time normally, fixed steps while recording
    fn now(&self) -> Duration {
        match &self.recording_config {
            Some(config) => Duration::from_secs_f32(config.frame_time_s(self.frame_num)),
            None => self.start_time.elapsed(),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> wavefield::error::Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Wavefield - Growth, Engineered.")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let mut render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.field.grid,
            &self.render_config,
            self.recording_config.clone(),
        ))?;

        let (width, height) = render_system.size();
        self.camera.set_viewport(width, height);
        self.overlay.set_viewport(width, height);
        render_system.update_overlay_uniforms(&self.overlay.uniforms());
        render_system.set_text_runs(&self.overlay.text_runs());

        log::info!(
            "Wavefield running: {} points, click the surface to drop ripples, ESC to quit",
            self.field.grid.point_count()
        );

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    fn handle_click(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let Some(ref render_system) = self.render_system else {
            return;
        };

        match self.overlay.route(cursor.x, cursor.y) {
            PointerTarget::Cta(kind) => {
                log::info!("CTA activated: {}", kind.label());
            }
            PointerTarget::Field => {
                let (width, height) = render_system.size();
                let ray = self.camera.ray_from_pixel(cursor.x, cursor.y, width, height);
                let now = self.now();
                if self.field.seed_from_ray(&ray, now).is_none() {
                    log::trace!("Click at ({:.0}, {:.0}) missed the field", cursor.x, cursor.y);
                }
            }
        }
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        // Minimized windows report 0x0, keep the last layout
        if width == 0 || height == 0 {
            return;
        }
        if let Some(ref mut render_system) = self.render_system {
            render_system.resize(width, height);
            self.camera.set_viewport(width, height);
            self.overlay.set_viewport(width, height);
            render_system.update_overlay_uniforms(&self.overlay.uniforms());
            render_system.set_text_runs(&self.overlay.text_runs());
        }
    }

    /// Process ripple expiries and sleep until the next one when idle
    fn schedule_expiries(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();
        let expired = self.field.expire_due(now);
        if expired > 0 {
            log::debug!("{} ripples expired, {} active", expired, self.field.ripples().len());
        }

        // Recording runs on a virtual clock and never sleeps
        let control_flow = match (self.field.next_expiry(), &self.recording_config) {
            (Some(deadline), None) => ControlFlow::WaitUntil(self.start_time + deadline),
            _ => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();
        let Some(ref mut render_system) = self.render_system else {
            return;
        };

        self.field.update(now);
        render_system.upload_positions(&mut self.field.grid);

        let mvp = self.camera.view_proj_matrix() * self.field.model_matrix();
        let uniforms = render_system.point_uniforms(mvp, &self.render_config);
        render_system.update_point_uniforms(&uniforms);

        match render_system.render(self.frame_num) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Render error: {:?}", e);
                return;
            }
        }

        self.frame_num += 1;

        if let Some(ref config) = self.recording_config {
            if self.frame_num >= config.total_frames() {
                log::info!("Recording complete: {} frames", self.frame_num);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.schedule_expiries(event_loop);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_window(event_loop) {
            log::error!("Failed to initialize: {}", e);
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Ripples do not outlive the surface they were drawn on
        self.field.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
            } => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_click(),
            WindowEvent::Resized(size) => self.handle_resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.field.reset();
        log::info!("Wavefield stopped after {} frames", self.frame_num);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let physics = args.field_physics();
    let ripple_params = args.ripple_params();
    let render_config = args.render_config();
    physics.validate()?;
    ripple_params.validate()?;
    render_config.validate()?;

    let recording_config = args
        .create_recording_config()
        .context("failed to set up recording")?;

    log::info!(
        "Initializing {}x{} grid (spacing {})",
        physics.grid_size,
        physics.grid_size,
        physics.grid_spacing
    );
    let field = WaveField::new(physics, ripple_params);

    let mut app = App::new(field, render_config, recording_config);
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;

    Ok(())
}
