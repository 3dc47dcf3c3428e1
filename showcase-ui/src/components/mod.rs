mod demo_card;
mod error_display;
mod form_fields;
mod status_panel;

pub use demo_card::DemoCard;
pub use error_display::ErrorDisplay;
pub use form_fields::{NumberField, SelectField, TextField};
pub use status_panel::StatusPanel;
