mod alert;
mod empty_message;
mod help;
mod status;

pub use help::KeyHint;

/// Namespace for the small paragraph widgets shared by the screens
pub struct UiComponent;
