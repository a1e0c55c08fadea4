pub mod config;
pub mod editor;
pub mod files;
pub mod output;
