mod primer;
mod write;

pub use primer::*;
pub use write::*;
