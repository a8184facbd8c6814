mod base_theme;
mod compose;
mod document;
pub(crate) mod palette;
mod rules;
mod types;

pub use base_theme::*;
pub use compose::*;
pub use document::*;
pub use palette::*;
pub use rules::*;
pub use types::*;
