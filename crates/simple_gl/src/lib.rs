//! # Simple GL Renderer
//!
//! A single-window wrapper around GLFW and an OpenGL context. Native window
//! and input callbacks are translated into a tagged [`events::Event`] value
//! and delivered synchronously to one registered callback.
//!
//! ## Features
//!
//! - **Single Window**: one window/context pair per process, guard enforced
//! - **Event Translation**: keyboard, text, cursor, mouse button, scroll,
//!   resize and close callbacks mapped onto a generic event type
//! - **Frame Lifecycle**: start-frame/end-frame pair (clear, swap, poll)
//! - **VSync Control**: runtime swap-interval toggling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use simple_gl::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         // Set up initial state
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Per-frame logic
//!         Ok(())
//!     }
//!
//!     fn handle_event(&mut self, engine: &mut Engine, event: &Event) -> Result<(), AppError> {
//!         if let Event::WindowClosed = event {
//!             // Shutting down
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {
//!         // Release state
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod window;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        AppError, Application, Engine, EngineConfig, EngineError,
        config::{Config, ConfigError},
        events::{Event, Modifiers},
        foundation::time::Timer,
        input::{KeyCode, MouseButton},
        window::{Window, WindowConfig, WindowError},
    };
}
