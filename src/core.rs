pub mod error;
pub mod id;

mod color;
mod graph;
mod successors;

pub use color::Color;
pub use graph::Graph;
pub use successors::Successors;
