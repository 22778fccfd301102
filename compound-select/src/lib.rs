pub mod error;
pub mod handlers;
pub mod runtime;
pub mod scope;
pub mod select;
pub mod state;
pub mod view;

pub use error::SelectError;
pub use runtime::{Runtime, RuntimeConfig};

pub mod prelude {
    pub use crate::error::SelectError;
    pub use crate::runtime::{Runtime, RuntimeConfig};
    pub use crate::scope::Scope;
    pub use crate::select::{Select, SelectContent, SelectItem, SelectTrigger, SelectValue};
    pub use crate::state::{SelectChannel, SelectState};
    pub use crate::view::{col, row, text, Group, View};

    pub use selectdom::{ClickEvent, MouseButton};
}
