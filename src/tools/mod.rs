pub mod buffer;
pub mod cli;
pub mod files;
