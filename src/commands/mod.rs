pub mod root;
pub mod status;

pub use root::*;
pub use status::*;
