/// Untargeted input, as read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pointer button pressed
    PointerDown { x: u16, y: u16, button: MouseButton },
    /// Pointer button released
    PointerUp { x: u16, y: u16, button: MouseButton },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Input {
    /// Convert a crossterm event. Returns None for events the host does not route.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, MouseEventKind};

        match event {
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Self::PointerDown {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                MouseEventKind::Up(button) => Some(Self::PointerUp {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                _ => None,
            },
            CtEvent::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Pointer-down event delivered to document listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    /// Deepest element under the pointer, if any.
    pub target: Option<String>,
    /// Ancestors of the target, root first, ending with the target.
    pub path: Vec<String>,
}

impl PointerEvent {
    pub fn new(x: u16, y: u16, button: MouseButton, path: Vec<String>) -> Self {
        Self {
            x,
            y,
            button,
            target: path.last().cloned(),
            path,
        }
    }

    /// Whether the element `id` is the target or one of its ancestors.
    pub fn is_within(&self, id: &str) -> bool {
        self.path.iter().any(|ancestor| ancestor == id)
    }
}

/// Activation of a clickable element (press and release on the same target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: String,
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
