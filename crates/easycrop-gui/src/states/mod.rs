mod keys;
mod ui;
mod viewport;

pub use keys::KeyBindings;
pub use ui::UIState;
pub use viewport::ViewportState;
