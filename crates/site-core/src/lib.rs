pub mod anchor;
pub mod class;
pub mod config;
pub mod constants;
pub mod nav;
pub mod parallax;

pub use anchor::*;
pub use class::*;
pub use config::*;
pub use nav::*;
pub use parallax::*;
