pub mod file_ops;
pub mod state;

pub use state::*;
