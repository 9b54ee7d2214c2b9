//! Core engine loop

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::{AppError, Application};
use crate::config::Config;
use crate::events::Event;
use crate::foundation::time::Timer;
use crate::window::{Window, WindowConfig};

/// Main engine struct
///
/// Owns the window and frame timing and drives the main loop. Events
/// delivered through the window's registered callback are queued and
/// forwarded to the [`Application`] once per frame, in delivery order.
pub struct Engine {
    window: Window,

    /// Frame timing
    timer: Timer,

    /// Events gathered by the window callback, pending application dispatch
    pending_events: Rc<RefCell<VecDeque<Event>>>,

    /// Whether the loop should keep running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    ///
    /// # Errors
    /// [`EngineError::InitializationFailed`] when the window cannot be
    /// created.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        let mut window = Window::from_config(&config.window)
            .map_err(|e| EngineError::InitializationFailed(format!("Window: {e}")))?;

        let pending_events = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending_events);
        window.set_event_callback(move |event| sink.borrow_mut().push_back(event.clone()));

        Ok(Self {
            window,
            timer: Timer::new(),
            pending_events,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    ///
    /// The loop runs until the window is closed or the application requests
    /// shutdown. Every frame: start frame, update, render, end frame (which
    /// polls and delivers events), then forward the delivered events to the
    /// application.
    ///
    /// # Errors
    /// Initialization failures, or any error the application returns.
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(&config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");

        while engine.running {
            engine.timer.update();
            let delta_time = engine.timer.delta_time();

            engine.window.start_frame();

            app.update(&mut engine, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

            app.render(&mut engine)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;

            engine.window.end_frame();

            loop {
                let event = engine.pending_events.borrow_mut().pop_front();
                let Some(event) = event else { break };
                if matches!(event, Event::WindowClosed) {
                    engine.running = false;
                }
                app.handle_event(&mut engine, &event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;
            }

            if engine.window.should_close() {
                engine.running = false;
            }
        }

        app.cleanup(&mut engine);

        log::info!("Engine shutdown complete");
        Ok(())
    }

    /// Get the window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Get mutable access to the window
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Get the current frame delta time in seconds
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Get the frames-per-second estimate of the last frame
    pub fn current_fps(&self) -> f32 {
        self.timer.current_fps()
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,
}

impl Config for EngineConfig {}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_well_formed() {
        let config = EngineConfig::default();
        assert_eq!(config.window.title, "Simple GL Renderer");
        assert_eq!((config.window.width, config.window.height), (1280, 720));
        assert!(config.window.resizable);
        assert!(config.window.vsync);
    }
}
