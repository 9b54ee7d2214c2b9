//! GLFW window backend with an OpenGL context
//!
//! Owns the GLFW instance, the native window and its event receiver. The GL
//! symbols are loaded against the window's context at creation; all `unsafe`
//! in the crate is confined to the GL calls in this file.

use glfw::Context;

use super::backend::WindowBackend;
use super::{WindowError, WindowResult};

/// GLFW-backed window with proper resource management
///
/// Dropping the backend destroys the window and, once the last GLFW handle
/// is gone, terminates the library.
pub(crate) struct GlfwBackend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwBackend {
    pub(crate) fn new(
        title: &str,
        width: u32,
        height: u32,
        resizable: bool,
    ) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        // Core-profile OpenGL context
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(resizable));

        // Create window; on failure the glfw handle drops and the library
        // terminates with it
        let Some((mut window, events)) =
            glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
        else {
            log::error!("Failed to create window");
            return Err(WindowError::CreationFailed);
        };

        window.make_current();
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        // Per-event polling for everything the event layer translates
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);

        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }

        Ok(Self {
            glfw,
            window,
            events,
        })
    }
}

impl WindowBackend for GlfwBackend {
    fn begin_frame(&mut self) {
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn drain_events(&mut self) -> Vec<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events).collect()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_swap_interval(&mut self, enabled: bool) {
        self.glfw.set_swap_interval(swap_interval(enabled));
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }
}

/// Map the VSync flag onto a GLFW swap interval
pub(crate) fn swap_interval(enabled: bool) -> glfw::SwapInterval {
    if enabled {
        glfw::SwapInterval::Sync(1)
    } else {
        glfw::SwapInterval::None
    }
}
