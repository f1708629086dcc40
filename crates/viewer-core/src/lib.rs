pub mod camera;
pub mod constants;
pub mod drag;
pub mod error;
pub mod loader;
pub mod model;
pub mod picking;

pub use camera::*;
pub use drag::*;
pub use error::*;
pub use model::*;
pub use picking::*;
