pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use document::{Document, ListenerGuard, ListenerId};
pub use element::{find_by_data, find_element, Content, Element};
pub use event::{ClickEvent, Input, MouseButton, PointerEvent};
pub use hit::{hit_path, hit_test};
pub use layout::{LayoutResult, Rect};
pub use types::Direction;
