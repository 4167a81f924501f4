//! Rendering front end
//!
//! Produces a backend-agnostic triangle list in screen pixels. Uploading and
//! drawing it is up to the host.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{build_scene, road_edges};
pub use vertex::Vertex;
