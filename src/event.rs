//! Input events the widgets consume from the host.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab { shift: bool },
    Space,
    Other,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HostEvent {
    PointerEnter,
    PointerLeave,
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    KeyDown(Key),
    FocusIn,
    FocusOut,
    /// The host's visibility flipped; the new value is read from the environment.
    VisibilityChange,
    PrevClicked,
    NextClicked,
    DotClicked(usize),
}
