pub mod activity;
pub mod citations;

pub use activity::*;
pub use citations::*;
