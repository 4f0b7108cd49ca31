pub mod change;
pub mod project;
pub mod requirement;

pub use change::*;
pub use project::*;
pub use requirement::*;
