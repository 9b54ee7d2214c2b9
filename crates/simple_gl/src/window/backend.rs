//! Backend trait for the window wrapper
//!
//! The trait is the seam between the public [`super::Window`] type and the
//! native windowing library. It is internal only; applications never see it.
//! Tests substitute a mock implementation to observe the wrapper's behavior
//! without a display.

/// Internal contract a windowing backend must fulfill
///
/// Native events cross the seam untranslated; the wrapper owns translation
/// and dispatch so every backend shares one code path.
pub(crate) trait WindowBackend {
    /// Clear the color and depth buffers for a new frame
    fn begin_frame(&mut self);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Pump the native event queue
    fn poll_events(&mut self);

    /// Take all native events gathered since the last drain
    ///
    /// Each entry pairs the native timestamp with the raw event.
    fn drain_events(&mut self) -> Vec<(f64, glfw::WindowEvent)>;

    /// Whether the native close flag is set
    fn should_close(&self) -> bool;

    /// Set the native close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Set the native window title
    fn set_title(&mut self, title: &str);

    /// Apply a swap interval: one vertical blank when enabled, immediate
    /// presentation otherwise
    fn set_swap_interval(&mut self, enabled: bool);

    /// Current client-area size in screen coordinates
    fn size(&self) -> (u32, u32);

    /// Resize the GL viewport to the given framebuffer dimensions
    fn resize_viewport(&mut self, width: u32, height: u32);
}
