//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::events::Event;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to build a demo or tool on top of the engine loop.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the window and engine are up. Use this to set up
    /// initial state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame, after the frame was started and before rendering.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Render the application
    ///
    /// Called after update, while the frame is open. The frame itself is
    /// already cleared; the default implementation draws nothing.
    fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let _ = engine;
        Ok(())
    }

    /// Handle one translated window or input event
    ///
    /// Called once per event delivered through the window callback, in
    /// delivery order. The default implementation ignores the event.
    fn handle_event(&mut self, engine: &mut Engine, event: &Event) -> Result<(), AppError> {
        let _ = (engine, event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the loop has ended, before the window is torn down.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}
