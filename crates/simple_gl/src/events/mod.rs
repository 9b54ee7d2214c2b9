//! Window and input event types
//!
//! Every native callback the window polls for is mapped onto one [`Event`]
//! value. Events are constructed fresh per callback invocation and carry no
//! identity beyond the single synchronous dispatch to the registered handler.

use crate::input::{KeyCode, MouseButton};

/// A translated window or input occurrence
///
/// The payload of each variant mirrors the parameters of the native callback
/// it was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A key was pressed (or held, when `repeat` is set)
    KeyPressed {
        /// The key that went down
        key: KeyCode,
        /// Whether this is an auto-repeat of a held key
        repeat: bool,
        /// Modifier keys held at the time of the press
        modifiers: Modifiers,
    },

    /// A key was released
    KeyReleased {
        /// The key that went up
        key: KeyCode,
        /// Modifier keys held at the time of the release
        modifiers: Modifiers,
    },

    /// A character was typed (text input, after keymap translation)
    KeyTyped {
        /// The translated character
        character: char,
    },

    /// The cursor moved inside the window
    MouseMoved {
        /// New cursor X coordinate in screen coordinates
        x: f64,
        /// New cursor Y coordinate in screen coordinates
        y: f64,
    },

    /// A mouse button was pressed
    MouseButtonPressed {
        /// The button that went down
        button: MouseButton,
        /// Modifier keys held at the time of the press
        modifiers: Modifiers,
    },

    /// A mouse button was released
    MouseButtonReleased {
        /// The button that went up
        button: MouseButton,
        /// Modifier keys held at the time of the release
        modifiers: Modifiers,
    },

    /// The scroll wheel (or touchpad) moved
    MouseScrolled {
        /// Horizontal scroll offset
        x_offset: f64,
        /// Vertical scroll offset
        y_offset: f64,
    },

    /// The window was resized
    WindowResized {
        /// New client-area width in pixels
        width: u32,
        /// New client-area height in pixels
        height: u32,
    },

    /// The user requested the window to close
    WindowClosed,
}

bitflags::bitflags! {
    /// Modifier keys held during a key or mouse button event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// A shift key
        const SHIFT = 1 << 0;
        /// A control key
        const CONTROL = 1 << 1;
        /// An alt key
        const ALT = 1 << 2;
        /// A super (command/windows) key
        const SUPER = 1 << 3;
    }
}

impl Modifiers {
    /// Whether a shift key was held
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Whether a control key was held
    pub fn control(self) -> bool {
        self.contains(Self::CONTROL)
    }

    /// Whether an alt key was held
    pub fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    /// Whether a super key was held
    pub fn super_key(self) -> bool {
        self.contains(Self::SUPER)
    }

    /// Build the modifier set from the native GLFW modifier word
    ///
    /// Lock-state bits (caps lock, num lock) are not carried over.
    pub(crate) fn from_native(mods: glfw::Modifiers) -> Self {
        let mut out = Self::empty();
        if mods.contains(glfw::Modifiers::Shift) {
            out |= Self::SHIFT;
        }
        if mods.contains(glfw::Modifiers::Control) {
            out |= Self::CONTROL;
        }
        if mods.contains(glfw::Modifiers::Alt) {
            out |= Self::ALT;
        }
        if mods.contains(glfw::Modifiers::Super) {
            out |= Self::SUPER;
        }
        out
    }
}

/// The process-wide event handler registered on the window
pub type EventCallback = Box<dyn FnMut(&Event)>;

/// Translate a native GLFW event into an [`Event`]
///
/// Returns `None` for native events that have no generic counterpart
/// (framebuffer size, focus, refresh, etc.). A repeat key action folds into
/// `KeyPressed` with the `repeat` flag set.
pub(crate) fn translate(native: glfw::WindowEvent) -> Option<Event> {
    use glfw::WindowEvent as Native;

    match native {
        Native::Key(key, _, glfw::Action::Press, mods) => Some(Event::KeyPressed {
            key: key.into(),
            repeat: false,
            modifiers: Modifiers::from_native(mods),
        }),
        Native::Key(key, _, glfw::Action::Repeat, mods) => Some(Event::KeyPressed {
            key: key.into(),
            repeat: true,
            modifiers: Modifiers::from_native(mods),
        }),
        Native::Key(key, _, glfw::Action::Release, mods) => Some(Event::KeyReleased {
            key: key.into(),
            modifiers: Modifiers::from_native(mods),
        }),
        Native::Char(character) => Some(Event::KeyTyped { character }),
        Native::CursorPos(x, y) => Some(Event::MouseMoved { x, y }),
        Native::MouseButton(button, glfw::Action::Press, mods) => {
            Some(Event::MouseButtonPressed {
                button: button.into(),
                modifiers: Modifiers::from_native(mods),
            })
        }
        Native::MouseButton(button, glfw::Action::Release, mods) => {
            Some(Event::MouseButtonReleased {
                button: button.into(),
                modifiers: Modifiers::from_native(mods),
            })
        }
        Native::Size(width, height) => Some(Event::WindowResized {
            width: width as u32,
            height: height as u32,
        }),
        Native::Close => Some(Event::WindowClosed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::{Action, Key, WindowEvent};

    #[test]
    fn key_press_carries_code_and_modifiers() {
        let native = WindowEvent::Key(
            Key::A,
            0,
            Action::Press,
            glfw::Modifiers::Shift | glfw::Modifiers::Control,
        );
        let event = translate(native).unwrap();
        assert_eq!(
            event,
            Event::KeyPressed {
                key: KeyCode::A,
                repeat: false,
                modifiers: Modifiers::SHIFT | Modifiers::CONTROL,
            }
        );
    }

    #[test]
    fn key_repeat_folds_into_pressed() {
        let native = WindowEvent::Key(Key::Space, 0, Action::Repeat, glfw::Modifiers::empty());
        let event = translate(native).unwrap();
        assert_eq!(
            event,
            Event::KeyPressed {
                key: KeyCode::Space,
                repeat: true,
                modifiers: Modifiers::empty(),
            }
        );
    }

    #[test]
    fn key_release_yields_released() {
        let native = WindowEvent::Key(Key::Escape, 0, Action::Release, glfw::Modifiers::empty());
        let event = translate(native).unwrap();
        assert_eq!(
            event,
            Event::KeyReleased {
                key: KeyCode::Escape,
                modifiers: Modifiers::empty(),
            }
        );
    }

    #[test]
    fn char_yields_typed() {
        let event = translate(WindowEvent::Char('q')).unwrap();
        assert_eq!(event, Event::KeyTyped { character: 'q' });
    }

    #[test]
    fn cursor_position_yields_mouse_moved() {
        let event = translate(WindowEvent::CursorPos(12.5, 34.0)).unwrap();
        assert_eq!(event, Event::MouseMoved { x: 12.5, y: 34.0 });
    }

    #[test]
    fn mouse_button_press_and_release() {
        let press = translate(WindowEvent::MouseButton(
            glfw::MouseButton::Button2,
            Action::Press,
            glfw::Modifiers::Alt,
        ))
        .unwrap();
        assert_eq!(
            press,
            Event::MouseButtonPressed {
                button: MouseButton::Right,
                modifiers: Modifiers::ALT,
            }
        );

        let release = translate(WindowEvent::MouseButton(
            glfw::MouseButton::Button1,
            Action::Release,
            glfw::Modifiers::empty(),
        ))
        .unwrap();
        assert_eq!(
            release,
            Event::MouseButtonReleased {
                button: MouseButton::Left,
                modifiers: Modifiers::empty(),
            }
        );
    }

    #[test]
    fn scroll_carries_both_offsets() {
        let event = translate(WindowEvent::Scroll(-1.0, 2.0)).unwrap();
        assert_eq!(
            event,
            Event::MouseScrolled {
                x_offset: -1.0,
                y_offset: 2.0,
            }
        );
    }

    #[test]
    fn size_yields_resized() {
        let event = translate(WindowEvent::Size(800, 600)).unwrap();
        assert_eq!(
            event,
            Event::WindowResized {
                width: 800,
                height: 600,
            }
        );
    }

    #[test]
    fn close_yields_closed() {
        assert_eq!(translate(WindowEvent::Close), Some(Event::WindowClosed));
    }

    #[test]
    fn unhandled_native_events_are_dropped() {
        assert_eq!(translate(WindowEvent::Refresh), None);
        assert_eq!(translate(WindowEvent::Focus(true)), None);
        assert_eq!(translate(WindowEvent::FramebufferSize(640, 480)), None);
    }

    #[test]
    fn modifier_translation_covers_all_four_flags() {
        let all = glfw::Modifiers::Shift
            | glfw::Modifiers::Control
            | glfw::Modifiers::Alt
            | glfw::Modifiers::Super;
        let mods = Modifiers::from_native(all);
        assert!(mods.shift());
        assert!(mods.control());
        assert!(mods.alt());
        assert!(mods.super_key());

        // Lock states stay behind
        let locks = glfw::Modifiers::CapsLock | glfw::Modifiers::NumLock;
        assert_eq!(Modifiers::from_native(locks), Modifiers::empty());
    }
}
