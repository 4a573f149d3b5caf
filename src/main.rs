mod app;
mod audio;
mod camera;
mod components;
mod config;
mod constants;
mod events;
mod game;
mod input;
mod renderer;
mod systems;
mod ui;
mod vfx;

use camera::Camera;
use config::Config;
use constants::*;
use glam::Vec2;
use hecs::World;
use renderer::Renderer;
use std::path::Path;
use std::time::Instant;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load(Path::new(config::CONFIG_FILE))?;
    log::info!(
        "starting grapple demo ({}x{}, hook {} / player {} per tick)",
        config.window_width,
        config.window_height,
        config.hook_smoothing,
        config.player_smoothing
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    config: Config,
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    egui_glow: EguiGlow,

    // Rendering
    camera: Camera,
    renderer: Renderer,

    // Scene state
    world: World,
    player_entity: hecs::Entity,
    hook_entity: hecs::Entity,
    /// The position the hook moves to - the last pointer-down location.
    /// Defaults to the origin until the first click, so both points drift
    /// toward the bottom-left corner from scene start.
    hook_target: Vec2,
    vfx: vfx::VfxManager,
    events: events::EventQueue,
    audio: Option<audio::AudioManager>,

    // Live tuning (config file values, editable from the panel)
    config: Config,
    show_panel: bool,

    // Input state
    input: input::InputState,

    // Timing
    last_frame_time: Instant,

    // Keeps the profiler server alive while the app runs
    _puffin_server: Option<puffin_http::Server>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = self.config.clone();

        // Create window and GL context
        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop, config.window_width, config.window_height);

        // Initialize rendering
        let size = window.inner_size();
        let mut camera = Camera::new(size.width as f32, size.height as f32);
        let renderer = Renderer::new(gl).expect("Failed to create renderer");
        game::setup_camera(&mut camera);

        // Initialize the scene
        let (world, player_entity, hook_entity) = game::init_world(&config);

        // Audio is optional - a missing output device degrades to silence
        let audio = if config.audio {
            audio::AudioManager::new()
        } else {
            None
        };

        let puffin_server = if config.profiling {
            puffin::set_scopes_on(true);
            let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
            match puffin_http::Server::new(&addr) {
                Ok(server) => {
                    log::info!("puffin server listening on {addr}");
                    Some(server)
                }
                Err(err) => {
                    log::warn!("failed to start puffin server: {err}");
                    None
                }
            }
        } else {
            None
        };

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            egui_glow,
            camera,
            renderer,
            world,
            player_entity,
            hook_entity,
            hook_target: Vec2::ZERO,
            vfx: vfx::VfxManager::new(),
            events: events::EventQueue::new(),
            audio,
            config,
            show_panel: true,
            input: input::InputState::new(),
            last_frame_time: Instant::now(),
            _puffin_server: puffin_server,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.renderer.resize(size.width as i32, size.height as i32);
                state.camera.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                state.input.keys_pressed.insert(key);
                            }
                            ElementState::Released => {
                                state.input.keys_pressed.remove(&key);
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.input.last_mouse_pos = state.input.mouse_pos;
                state.input.mouse_pos = (position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                if button == MouseButton::Left {
                    match btn_state {
                        ElementState::Pressed => {
                            if !egui_consumed.consumed {
                                state.input.register_press();
                            }
                        }
                        ElementState::Released => {
                            let was_click = state.input.register_release();
                            state.camera.release_pan();

                            // A click (not a drag) fires the grapple
                            if was_click && !egui_consumed.consumed {
                                state.fire_grapple();
                            }
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !egui_consumed.consumed {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y * 2.0,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                    };
                    state.camera.add_zoom_impulse(
                        scroll,
                        state.input.mouse_pos.0,
                        state.input.mouse_pos.1,
                    );
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    /// Set the grapple target to the pointer location and notify listeners.
    fn fire_grapple(&mut self) {
        let world_pos = self
            .camera
            .screen_to_world(self.input.mouse_pos.0, self.input.mouse_pos.1);
        self.hook_target = world_pos;
        self.events.push(events::GameEvent::GrappleFired {
            x: world_pos.x,
            y: world_pos.y,
        });
        log::debug!("grapple fired at ({:.1}, {:.1})", world_pos.x, world_pos.y);
    }

    /// Move the scene back to its spawn state, target included.
    fn reset_scene(&mut self) {
        game::reset_scene(&mut self.world, self.player_entity, self.hook_entity);
        self.hook_target = Vec2::ZERO;
        self.events.push(events::GameEvent::SceneReset);
    }

    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt so a long frame can't make the timed variant snap
        let dt = raw_dt.min(MAX_FRAME_DT);

        // Handle input
        let result = input::process_keyboard(&mut self.input);
        if result.toggle_fullscreen {
            use winit::window::Fullscreen;
            let fullscreen = if self.window.fullscreen().is_some() {
                None
            } else {
                Some(Fullscreen::Borderless(None))
            };
            self.window.set_fullscreen(fullscreen);
        }
        if result.toggle_panel {
            self.show_panel = !self.show_panel;
        }
        if result.reset {
            self.reset_scene();
        }

        // Move the hook and player toward the target. The fixed-fraction
        // update is the reference behavior; the timed variant is opt-in.
        game::apply_tuning(
            &mut self.world,
            self.player_entity,
            self.hook_entity,
            &self.config,
        );
        if self.config.frame_rate_independent {
            systems::seek_target_timed(&mut self.world, self.hook_target, dt);
        } else {
            systems::seek_target(&mut self.world, self.hook_target);
        }

        // Update one-shot effects
        self.vfx.update(dt);

        // Camera panning and momentum
        input::process_mouse_drag(&mut self.input, &mut self.camera);
        self.camera.update(dt, self.input.mouse_down);

        // Dispatch events to VFX and audio
        for event in self.events.drain() {
            self.vfx.handle_event(&event);
            if let Some(audio) = &self.audio {
                audio.handle_event(&event);
            }
        }

        // Collect render data
        let entities = systems::collect_renderables(&self.world);
        let rope = systems::rope_path(&self.world);

        // Run UI
        let actions = self.run_ui();
        if actions.reset {
            self.reset_scene();
        }

        // Render
        self.renderer.clear();
        if let Some(rope) = &rope {
            self.renderer.render_rope(&self.camera, rope);
        }
        self.renderer.render_entities(&self.camera, &entities);
        self.renderer.render_vfx(&self.camera, &self.vfx.effects);

        // Render egui
        self.egui_glow.paint(&self.window);

        // Swap buffers
        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }

    fn run_ui(&mut self) -> ui::UiActions {
        let mut actions = ui::UiActions::default();
        if !self.show_panel {
            // Still run the pass so egui stays consistent frame to frame
            self.egui_glow.run(&self.window, |_ctx| {});
            return actions;
        }

        let readout = ui::PanelReadout {
            target: self.hook_target,
            hook: self
                .world
                .get::<&components::Position>(self.hook_entity)
                .map(|p| p.as_vec2())
                .unwrap_or(Vec2::ZERO),
            player: self
                .world
                .get::<&components::Position>(self.player_entity)
                .map(|p| p.as_vec2())
                .unwrap_or(Vec2::ZERO),
        };

        let config = &mut self.config;
        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_tuning_panel(ctx, &readout, config, &mut actions);
        });

        actions
    }
}
