//! Single-window management
//!
//! One [`Window`] wraps one native window/GL-context pair. Only a single
//! instance may exist per process; a static guard rejects a second
//! construction until the first window is dropped.
//!
//! The wrapper is layered over an internal [`backend::WindowBackend`] trait:
//!
//! - **`Window`**: public surface — lifecycle, frame begin/end, VSync, title,
//!   callback registration
//! - **`backend`**: the contract a native backend fulfills
//! - **`glfw_backend`**: the GLFW + OpenGL implementation
//!
//! Native events drained during [`Window::end_frame`] are translated into
//! [`Event`] values and delivered synchronously, one at a time, to the
//! registered callback.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::{self, Event, EventCallback};

pub(crate) mod backend;
mod glfw_backend;

use backend::WindowBackend;
use glfw_backend::GlfwBackend;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// A window already exists in this process
    #[error("only one window per process is supported")]
    AlreadyExists,

    /// GLFW initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window creation failed
    #[error("window creation failed")]
    CreationFailed,

    /// GLFW error
    #[error("GLFW error: {0}")]
    Glfw(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Window construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Client-area width in pixels
    pub width: u32,

    /// Client-area height in pixels
    pub height: u32,

    /// Whether the window is resizable
    pub resizable: bool,

    /// Whether to synchronize buffer swaps with the vertical blank
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Simple GL Renderer".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
            vsync: true,
        }
    }
}

// One window per process. Set while a Window is alive, cleared on Drop.
static WINDOW_ALIVE: AtomicBool = AtomicBool::new(false);

/// The window wrapper managing one native window/GL-context pair
pub struct Window {
    backend: Box<dyn WindowBackend>,
    callback: Option<EventCallback>,
    title: String,
    width: u32,
    height: u32,
    vsync: bool,
}

impl Window {
    /// Create the process's window with the given title and size
    ///
    /// Remaining parameters take their [`WindowConfig`] defaults.
    ///
    /// # Errors
    /// [`WindowError::AlreadyExists`] if a window is already alive,
    /// [`WindowError::InitializationFailed`] if GLFW cannot be initialized,
    /// [`WindowError::CreationFailed`] if the native window cannot be created.
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        Self::from_config(&WindowConfig {
            title: title.to_string(),
            width,
            height,
            ..WindowConfig::default()
        })
    }

    /// Create the process's window from a [`WindowConfig`]
    ///
    /// # Errors
    /// Same conditions as [`Window::new`].
    pub fn from_config(config: &WindowConfig) -> WindowResult<Self> {
        acquire_guard()?;
        let backend = match GlfwBackend::new(
            &config.title,
            config.width,
            config.height,
            config.resizable,
        ) {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                release_guard();
                return Err(e);
            }
        };
        log::info!(
            "Created window \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );
        Ok(Self::assemble(backend, config))
    }

    /// Wrap an already-constructed backend; used by tests to inject a mock.
    #[cfg(test)]
    fn from_backend(backend: Box<dyn WindowBackend>, config: &WindowConfig) -> WindowResult<Self> {
        acquire_guard()?;
        Ok(Self::assemble(backend, config))
    }

    fn assemble(mut backend: Box<dyn WindowBackend>, config: &WindowConfig) -> Self {
        backend.set_swap_interval(config.vsync);
        Self {
            backend,
            callback: None,
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            vsync: config.vsync,
        }
    }

    /// Register the callback receiving every translated event
    ///
    /// There is one callback per window; registering again replaces the
    /// previous handler.
    pub fn set_event_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Begin a frame: clear the color and depth buffers
    pub fn start_frame(&mut self) {
        self.backend.begin_frame();
    }

    /// End a frame: swap buffers, poll the native event queue, and deliver
    /// every pending event to the registered callback
    pub fn end_frame(&mut self) {
        self.backend.swap_buffers();
        self.backend.poll_events();
        for (_, native) in self.backend.drain_events() {
            self.process_native(native);
        }
    }

    fn process_native(&mut self, native: glfw::WindowEvent) {
        match native {
            glfw::WindowEvent::Size(width, height) => {
                self.width = width as u32;
                self.height = height as u32;
            }
            // Keep the drawable area coherent with the framebuffer; this
            // carries no generic event of its own
            glfw::WindowEvent::FramebufferSize(width, height) => {
                self.backend.resize_viewport(width as u32, height as u32);
            }
            _ => {}
        }
        if let Some(event) = events::translate(native) {
            if let Some(callback) = self.callback.as_mut() {
                callback(&event);
            }
        }
    }

    /// Toggle VSync; reflected in subsequent swap-interval calls
    pub fn set_vsync(&mut self, enabled: bool) {
        self.vsync = enabled;
        self.backend.set_swap_interval(enabled);
    }

    /// Whether VSync is currently enabled
    pub fn is_vsync(&self) -> bool {
        self.vsync
    }

    /// Set the window title
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.backend.set_title(title);
    }

    /// The current window title
    ///
    /// GLFW provides no way to query the native title, so the wrapper keeps
    /// its own copy.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current client-area size in pixels, following resize events
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Current client-area width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current client-area height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Set the native close flag
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        release_guard();
    }
}

fn acquire_guard() -> WindowResult<()> {
    if WINDOW_ALIVE.swap(true, Ordering::SeqCst) {
        return Err(WindowError::AlreadyExists);
    }
    Ok(())
}

fn release_guard() {
    WINDOW_ALIVE.store(false, Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Modifiers;
    use crate::input::{KeyCode, MouseButton};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    // Window tests share the process-wide guard; run them one at a time.
    static SERIAL: Mutex<()> = Mutex::new(());

    #[derive(Default)]
    struct MockState {
        queued: Vec<(f64, glfw::WindowEvent)>,
        frames_cleared: usize,
        frames_swapped: usize,
        polls: usize,
        titles: Vec<String>,
        swap_intervals: Vec<bool>,
        viewports: Vec<(u32, u32)>,
        should_close: bool,
    }

    struct MockBackend(Rc<RefCell<MockState>>);

    impl WindowBackend for MockBackend {
        fn begin_frame(&mut self) {
            self.0.borrow_mut().frames_cleared += 1;
        }

        fn swap_buffers(&mut self) {
            self.0.borrow_mut().frames_swapped += 1;
        }

        fn poll_events(&mut self) {
            self.0.borrow_mut().polls += 1;
        }

        fn drain_events(&mut self) -> Vec<(f64, glfw::WindowEvent)> {
            std::mem::take(&mut self.0.borrow_mut().queued)
        }

        fn should_close(&self) -> bool {
            self.0.borrow().should_close
        }

        fn set_should_close(&mut self, should_close: bool) {
            self.0.borrow_mut().should_close = should_close;
        }

        fn set_title(&mut self, title: &str) {
            self.0.borrow_mut().titles.push(title.to_string());
        }

        fn set_swap_interval(&mut self, enabled: bool) {
            self.0.borrow_mut().swap_intervals.push(enabled);
        }

        fn size(&self) -> (u32, u32) {
            (640, 480)
        }

        fn resize_viewport(&mut self, width: u32, height: u32) {
            self.0.borrow_mut().viewports.push((width, height));
        }
    }

    fn mock_window(state: &Rc<RefCell<MockState>>) -> Window {
        let config = WindowConfig {
            title: "mock".to_string(),
            width: 640,
            height: 480,
            ..WindowConfig::default()
        };
        Window::from_backend(Box::new(MockBackend(Rc::clone(state))), &config)
            .expect("guard should be free")
    }

    #[test]
    fn second_window_is_rejected_until_first_drops() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));

        let first = mock_window(&state);
        let second = Window::from_backend(
            Box::new(MockBackend(Rc::clone(&state))),
            &WindowConfig::default(),
        );
        assert!(matches!(second, Err(WindowError::AlreadyExists)));

        drop(first);
        let third = mock_window(&state);
        drop(third);
    }

    #[test]
    fn events_are_translated_and_delivered_in_order() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut window = mock_window(&state);

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        window.set_event_callback(move |event| sink.borrow_mut().push(event.clone()));

        state.borrow_mut().queued = vec![
            (
                0.0,
                glfw::WindowEvent::Key(glfw::Key::W, 0, glfw::Action::Press, glfw::Modifiers::Shift),
            ),
            (0.1, glfw::WindowEvent::Char('w')),
            (0.2, glfw::WindowEvent::CursorPos(3.0, 4.0)),
            (
                0.3,
                glfw::WindowEvent::MouseButton(
                    glfw::MouseButton::Button1,
                    glfw::Action::Press,
                    glfw::Modifiers::empty(),
                ),
            ),
            (0.4, glfw::WindowEvent::Scroll(0.0, -1.0)),
            (0.5, glfw::WindowEvent::Size(800, 600)),
            (0.6, glfw::WindowEvent::Close),
        ];
        window.end_frame();

        assert_eq!(
            *received.borrow(),
            vec![
                Event::KeyPressed {
                    key: KeyCode::W,
                    repeat: false,
                    modifiers: Modifiers::SHIFT,
                },
                Event::KeyTyped { character: 'w' },
                Event::MouseMoved { x: 3.0, y: 4.0 },
                Event::MouseButtonPressed {
                    button: MouseButton::Left,
                    modifiers: Modifiers::empty(),
                },
                Event::MouseScrolled {
                    x_offset: 0.0,
                    y_offset: -1.0,
                },
                Event::WindowResized {
                    width: 800,
                    height: 600,
                },
                Event::WindowClosed,
            ]
        );

        // The resize updated the wrapper's size too
        assert_eq!(window.size(), (800, 600));
        assert_eq!(state.borrow().frames_swapped, 1);
        assert_eq!(state.borrow().polls, 1);
    }

    #[test]
    fn framebuffer_size_updates_viewport_without_event() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut window = mock_window(&state);

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        window.set_event_callback(move |event| sink.borrow_mut().push(event.clone()));

        state.borrow_mut().queued = vec![(0.0, glfw::WindowEvent::FramebufferSize(1024, 768))];
        window.end_frame();

        assert!(received.borrow().is_empty());
        assert_eq!(state.borrow().viewports, vec![(1024, 768)]);
    }

    #[test]
    fn vsync_toggle_reaches_swap_interval() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut window = mock_window(&state);
        assert!(window.is_vsync());

        window.set_vsync(false);
        assert!(!window.is_vsync());
        window.set_vsync(true);

        // Initial state from construction, then the two toggles
        assert_eq!(state.borrow().swap_intervals, vec![true, false, true]);
    }

    #[test]
    fn title_setter_propagates_and_is_remembered() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut window = mock_window(&state);

        window.set_title("retitled");
        assert_eq!(window.title(), "retitled");
        assert_eq!(state.borrow().titles, vec!["retitled".to_string()]);
    }

    #[test]
    fn start_frame_clears_and_close_flag_round_trips() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut window = mock_window(&state);

        window.start_frame();
        assert_eq!(state.borrow().frames_cleared, 1);

        assert!(!window.should_close());
        window.set_should_close(true);
        assert!(window.should_close());
    }

    #[test]
    fn events_without_callback_are_dropped() {
        let _serial = SERIAL.lock().unwrap();
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut window = mock_window(&state);

        state.borrow_mut().queued = vec![(0.0, glfw::WindowEvent::Close)];
        // No callback registered; must not panic
        window.end_frame();
    }
}
