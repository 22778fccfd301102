//! Runtime configuration.

/// Configuration for a `Runtime`.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Name used in log lines.
    pub name: &'static str,

    /// Viewport width in cells. The root element fills the viewport and
    /// pointer input outside it is dropped.
    pub width: u16,

    /// Viewport height in cells.
    pub height: u16,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "select",
            width: 80,
            height: 24,
        }
    }
}

impl RuntimeConfig {
    /// Create a new config with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Set the viewport size.
    pub fn viewport(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
