pub mod vertex_map;
pub mod visit_set;

pub use vertex_map::{ColorMap, VertexMap};
pub use visit_set::VisitSet;
