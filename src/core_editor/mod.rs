mod editor;
pub mod locator;
mod text_area;

pub use editor::Editor;
pub use locator::WordLocation;
pub use text_area::{BufferAccess, Selection, TextArea};
