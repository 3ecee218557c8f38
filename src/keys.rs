//! Physical key identifiers.
//!
//! The key set is closed: schemes cover exactly the keys listed in
//! [`KeyCode::ALL`]. [`KeyCode::None`] is the "no key bound" sentinel and is
//! never a scheme entry.

/// Identifier of one physical keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Sentinel for an unbound control. Never present in a scheme.
    None,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Escape,
    Grave,
    Minus,
    Equals,
    Backspace,
    Tab,
    LeftBracket,
    RightBracket,
    Backslash,
    CapsLock,
    Semicolon,
    Apostrophe,
    Enter,
    LeftShift,
    Comma,
    Period,
    Slash,
    RightShift,
    LeftControl,
    LeftAlt,
    Space,
    RightAlt,
    RightControl,

    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    Delete,
    End,
    PageDown,

    Up,
    Down,
    Left,
    Right,

    NumLock,
    KeypadDivide,
    KeypadMultiply,
    KeypadMinus,
    KeypadPlus,
    KeypadEnter,
    KeypadPeriod,
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
}

impl KeyCode {
    /// Every valid key, in scheme insertion order. Excludes the sentinel.
    pub const ALL: &'static [KeyCode] = &[
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
        Self::Digit0,
        Self::Digit1,
        Self::Digit2,
        Self::Digit3,
        Self::Digit4,
        Self::Digit5,
        Self::Digit6,
        Self::Digit7,
        Self::Digit8,
        Self::Digit9,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
        Self::Escape,
        Self::Grave,
        Self::Minus,
        Self::Equals,
        Self::Backspace,
        Self::Tab,
        Self::LeftBracket,
        Self::RightBracket,
        Self::Backslash,
        Self::CapsLock,
        Self::Semicolon,
        Self::Apostrophe,
        Self::Enter,
        Self::LeftShift,
        Self::Comma,
        Self::Period,
        Self::Slash,
        Self::RightShift,
        Self::LeftControl,
        Self::LeftAlt,
        Self::Space,
        Self::RightAlt,
        Self::RightControl,
        Self::PrintScreen,
        Self::ScrollLock,
        Self::Pause,
        Self::Insert,
        Self::Home,
        Self::PageUp,
        Self::Delete,
        Self::End,
        Self::PageDown,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::NumLock,
        Self::KeypadDivide,
        Self::KeypadMultiply,
        Self::KeypadMinus,
        Self::KeypadPlus,
        Self::KeypadEnter,
        Self::KeypadPeriod,
        Self::Keypad0,
        Self::Keypad1,
        Self::Keypad2,
        Self::Keypad3,
        Self::Keypad4,
        Self::Keypad5,
        Self::Keypad6,
        Self::Keypad7,
        Self::Keypad8,
        Self::Keypad9,
    ];

    /// Number of valid keys.
    pub const COUNT: usize = Self::ALL.len();
}
