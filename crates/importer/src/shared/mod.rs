pub mod config;
pub mod error;
pub mod file_io;
