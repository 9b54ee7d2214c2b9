//! Sandbox demo application
//!
//! Exercises the full window surface: the event callback path, the VSync
//! toggle, the title setter, and the frame loop. Escape closes the window,
//! `V` flips VSync, and the title shows an FPS readout once per second.

use simple_gl::prelude::*;

/// How often the FPS readout in the title refreshes, in seconds
const TITLE_REFRESH_INTERVAL: f32 = 1.0;

struct SandboxApp {
    base_title: String,
    time_since_title: f32,
    frames_since_title: u32,
}

impl SandboxApp {
    fn new() -> Self {
        Self {
            base_title: String::new(),
            time_since_title: 0.0,
            frames_since_title: 0,
        }
    }
}

impl Application for SandboxApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.base_title = engine.window().title().to_string();
        let (width, height) = engine.window().size();
        log::info!("Sandbox up at {width}x{height}, vsync {}", engine.window().is_vsync());
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        self.time_since_title += delta_time;
        self.frames_since_title += 1;

        if self.time_since_title >= TITLE_REFRESH_INTERVAL {
            let fps = self.frames_since_title as f32 / self.time_since_title;
            let title = format!("{} | {fps:.0} FPS", self.base_title);
            engine.window_mut().set_title(&title);
            self.time_since_title = 0.0;
            self.frames_since_title = 0;
        }

        Ok(())
    }

    fn handle_event(&mut self, engine: &mut Engine, event: &Event) -> Result<(), AppError> {
        match event {
            Event::KeyPressed {
                key: KeyCode::Escape,
                ..
            } => {
                log::info!("Escape pressed, closing");
                engine.window_mut().set_should_close(true);
            }
            Event::KeyPressed {
                key: KeyCode::V,
                repeat: false,
                ..
            } => {
                let enabled = !engine.window().is_vsync();
                engine.window_mut().set_vsync(enabled);
                log::info!("VSync {}", if enabled { "on" } else { "off" });
            }
            Event::KeyPressed { key, repeat, modifiers } => {
                log::debug!("Key pressed: {key:?} (repeat {repeat}, mods {modifiers:?})");
            }
            Event::KeyTyped { character } => {
                log::debug!("Typed: {character:?}");
            }
            Event::MouseButtonPressed { button, .. } => {
                log::debug!("Mouse button pressed: {button:?}");
            }
            Event::MouseScrolled { x_offset, y_offset } => {
                log::debug!("Scrolled by ({x_offset}, {y_offset})");
            }
            Event::WindowResized { width, height } => {
                log::info!("Resized to {width}x{height}");
            }
            Event::WindowClosed => {
                log::info!("Close requested");
            }
            _ => {}
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!("Sandbox shutting down");
    }
}

fn main() {
    simple_gl::foundation::logging::init();

    let config = EngineConfig::load_or_default("sandbox.toml");
    let mut app = SandboxApp::new();

    if let Err(e) = Engine::run(config, &mut app) {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    }
}
