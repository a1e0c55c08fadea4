pub mod app;
pub mod cli;
pub mod device;
pub mod document;
pub mod error;
pub mod event;
pub mod form;
pub mod registry;
pub mod settings;
pub mod ui;
pub mod util;

pub use error::{EspmanError, Result};
