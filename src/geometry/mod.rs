mod line;
mod plane;

pub use line::{Line, Line2, Line3};
pub use plane::Plane;
