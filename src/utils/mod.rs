pub mod format;
pub mod validation;

pub use format::{
    format_carb_rate, format_carbs, format_duration, format_duration_minutes, from_iso_string,
    to_iso_string,
};
pub use validation::{is_positive_number, is_valid_email, is_valid_number};
