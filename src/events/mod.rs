pub mod pointer;

pub use pointer::{wire_viewer_handlers, ViewerWiring};
