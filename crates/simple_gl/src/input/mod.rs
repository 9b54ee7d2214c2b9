//! Input code translation
//!
//! Engine-level key and mouse button codes, decoupled from the native
//! windowing library. Conversions from the GLFW codes are total; keys this
//! layer does not distinguish collapse into [`KeyCode::Unknown`].

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// 0 key (top row)
    Num0,
    /// 1 key (top row)
    Num1,
    /// 2 key (top row)
    Num2,
    /// 3 key (top row)
    Num3,
    /// 4 key (top row)
    Num4,
    /// 5 key (top row)
    Num5,
    /// 6 key (top row)
    Num6,
    /// 7 key (top row)
    Num7,
    /// 8 key (top row)
    Num8,
    /// 9 key (top row)
    Num9,
    /// F1 key
    F1,
    /// F2 key
    F2,
    /// F3 key
    F3,
    /// F4 key
    F4,
    /// F5 key
    F5,
    /// F6 key
    F6,
    /// F7 key
    F7,
    /// F8 key
    F8,
    /// F9 key
    F9,
    /// F10 key
    F10,
    /// F11 key
    F11,
    /// F12 key
    F12,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Insert key
    Insert,
    /// Delete key
    Delete,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Home key
    Home,
    /// End key
    End,
    /// Page up key
    PageUp,
    /// Page down key
    PageDown,
    /// Minus key
    Minus,
    /// Equals key
    Equal,
    /// Left bracket key
    LeftBracket,
    /// Right bracket key
    RightBracket,
    /// Backslash key
    Backslash,
    /// Semicolon key
    Semicolon,
    /// Apostrophe key
    Apostrophe,
    /// Comma key
    Comma,
    /// Period key
    Period,
    /// Slash key
    Slash,
    /// Grave accent (backtick) key
    GraveAccent,
    /// Caps lock key
    CapsLock,
    /// Left shift key
    LeftShift,
    /// Right shift key
    RightShift,
    /// Left control key
    LeftControl,
    /// Right control key
    RightControl,
    /// Left alt key
    LeftAlt,
    /// Right alt key
    RightAlt,
    /// Left super key
    LeftSuper,
    /// Right super key
    RightSuper,
    /// Any key this layer does not distinguish
    Unknown,
}

impl From<glfw::Key> for KeyCode {
    fn from(key: glfw::Key) -> Self {
        use glfw::Key;
        match key {
            Key::A => Self::A,
            Key::B => Self::B,
            Key::C => Self::C,
            Key::D => Self::D,
            Key::E => Self::E,
            Key::F => Self::F,
            Key::G => Self::G,
            Key::H => Self::H,
            Key::I => Self::I,
            Key::J => Self::J,
            Key::K => Self::K,
            Key::L => Self::L,
            Key::M => Self::M,
            Key::N => Self::N,
            Key::O => Self::O,
            Key::P => Self::P,
            Key::Q => Self::Q,
            Key::R => Self::R,
            Key::S => Self::S,
            Key::T => Self::T,
            Key::U => Self::U,
            Key::V => Self::V,
            Key::W => Self::W,
            Key::X => Self::X,
            Key::Y => Self::Y,
            Key::Z => Self::Z,
            Key::Num0 => Self::Num0,
            Key::Num1 => Self::Num1,
            Key::Num2 => Self::Num2,
            Key::Num3 => Self::Num3,
            Key::Num4 => Self::Num4,
            Key::Num5 => Self::Num5,
            Key::Num6 => Self::Num6,
            Key::Num7 => Self::Num7,
            Key::Num8 => Self::Num8,
            Key::Num9 => Self::Num9,
            Key::F1 => Self::F1,
            Key::F2 => Self::F2,
            Key::F3 => Self::F3,
            Key::F4 => Self::F4,
            Key::F5 => Self::F5,
            Key::F6 => Self::F6,
            Key::F7 => Self::F7,
            Key::F8 => Self::F8,
            Key::F9 => Self::F9,
            Key::F10 => Self::F10,
            Key::F11 => Self::F11,
            Key::F12 => Self::F12,
            Key::Space => Self::Space,
            Key::Enter => Self::Enter,
            Key::Escape => Self::Escape,
            Key::Tab => Self::Tab,
            Key::Backspace => Self::Backspace,
            Key::Insert => Self::Insert,
            Key::Delete => Self::Delete,
            Key::Up => Self::Up,
            Key::Down => Self::Down,
            Key::Left => Self::Left,
            Key::Right => Self::Right,
            Key::Home => Self::Home,
            Key::End => Self::End,
            Key::PageUp => Self::PageUp,
            Key::PageDown => Self::PageDown,
            Key::Minus => Self::Minus,
            Key::Equal => Self::Equal,
            Key::LeftBracket => Self::LeftBracket,
            Key::RightBracket => Self::RightBracket,
            Key::Backslash => Self::Backslash,
            Key::Semicolon => Self::Semicolon,
            Key::Apostrophe => Self::Apostrophe,
            Key::Comma => Self::Comma,
            Key::Period => Self::Period,
            Key::Slash => Self::Slash,
            Key::GraveAccent => Self::GraveAccent,
            Key::CapsLock => Self::CapsLock,
            Key::LeftShift => Self::LeftShift,
            Key::RightShift => Self::RightShift,
            Key::LeftControl => Self::LeftControl,
            Key::RightControl => Self::RightControl,
            Key::LeftAlt => Self::LeftAlt,
            Key::RightAlt => Self::RightAlt,
            Key::LeftSuper => Self::LeftSuper,
            Key::RightSuper => Self::RightSuper,
            _ => Self::Unknown,
        }
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Additional button, by zero-based native index
    Other(u8),
}

impl From<glfw::MouseButton> for MouseButton {
    fn from(button: glfw::MouseButton) -> Self {
        use glfw::MouseButton as Native;
        match button {
            Native::Button1 => Self::Left,
            Native::Button2 => Self::Right,
            Native::Button3 => Self::Middle,
            Native::Button4 => Self::Other(3),
            Native::Button5 => Self::Other(4),
            Native::Button6 => Self::Other(5),
            Native::Button7 => Self::Other(6),
            Native::Button8 => Self::Other(7),
        }
    }
}
