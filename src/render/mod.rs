pub mod brd;
pub mod communication;

pub use brd::*;
pub use communication::*;
