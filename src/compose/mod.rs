mod assembler;
mod category;
pub mod defaults;
mod errors;
mod guard;

pub use assembler::{Composer, Presets, Selection};
pub use category::{Category, CategoryRegistry};
pub use errors::ComposeError;
pub use guard::is_empty_message;
