pub mod header;
pub mod notifications;
pub mod settings_panel;
pub mod swap_input;
pub mod token_picker;
