//! Editor host integration.
//!
//! [`Editor`] binds the command engine to one text surface. Hosts implement
//! [`TextSurface`] for their input control; [`EditorBuffer`] is a
//! rope-backed implementation for tests and the command line.

mod buffer;
mod controller;
mod surface;

pub use buffer::EditorBuffer;
pub use controller::Editor;
pub use surface::TextSurface;
