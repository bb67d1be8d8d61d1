pub mod prompts;
pub mod render;

pub use prompts::{
    collect_plan_items, fuzzy_candidates, parse_number, prompt_duration_minutes, prompt_email,
    prompt_minutes, prompt_positive_number, prompt_product, prompt_yes_no,
};
pub use render::{
    display_fuel_plan, display_products, display_progress, display_session, IntakeStatus,
    NextIntakeCard, ProgressBar, Tone,
};
