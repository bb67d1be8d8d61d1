use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{GiError, Result};
use crate::models::{FuelPlan, FuelProduct};
use crate::utils::validation::{is_positive_number, is_valid_email, is_valid_number};

/// Similarity above which a product name counts as a fuzzy match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Parse a prompt answer, rejecting blanks and non-numbers.
pub fn parse_number(input: &str) -> Result<f64> {
    if !is_valid_number(input) {
        return Err(GiError::InvalidInput(format!("'{}' is not a number", input.trim())));
    }
    input
        .trim()
        .parse()
        .map_err(|_| GiError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for a strictly positive number.
pub fn prompt_positive_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|value: &String| -> std::result::Result<(), &str> {
            if is_valid_number(value) {
                Ok(())
            } else {
                Err("Please enter a number")
            }
        })
        .interact_text()?;

    let value = parse_number(&input)?;
    if !is_positive_number(value) {
        return Err(GiError::InvalidInput(format!(
            "{} must be greater than zero",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for a whole number of minutes (zero allowed).
pub fn prompt_minutes(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| GiError::InvalidInput("Minutes must be a whole number".to_string()))
}

/// Prompt for the session duration in minutes.
pub fn prompt_duration_minutes() -> Result<u32> {
    let minutes = prompt_minutes("Session duration (minutes)", 90)?;
    if minutes == 0 {
        return Err(GiError::InvalidInput(
            "Session duration must be greater than zero".to_string(),
        ));
    }
    Ok(minutes)
}

/// Prompt for a contact email.
pub fn prompt_email() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Contact email")
        .validate_with(|value: &String| -> std::result::Result<(), &str> {
            if is_valid_email(value.trim()) {
                Ok(())
            } else {
                Err("Please enter an address like name@example.com")
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Products ranked by name similarity to `query`, best first.
pub fn fuzzy_candidates<'a>(products: &'a [FuelProduct], query: &str) -> Vec<(&'a FuelProduct, f64)> {
    let query = query.to_lowercase();
    let mut candidates: Vec<(&FuelProduct, f64)> = products
        .iter()
        .map(|p| (p, jaro_winkler(&p.key(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Prompt for a product by name with fuzzy matching.
///
/// Returns `None` when the user finishes with an empty answer.
pub fn prompt_product(products: &[FuelProduct]) -> Result<Option<FuelProduct>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Fuel product (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Exact match first (case-insensitive)
        if let Some(product) = products.iter().find(|p| p.key() == input.to_lowercase()) {
            return Ok(Some(product.clone()));
        }

        let candidates = fuzzy_candidates(products, input);

        if candidates.is_empty() {
            println!("No matching product found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let product = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", product.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(product.clone()));
            }
            continue;
        }

        let options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(p, _)| p.name.clone())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(candidates[selection].0.clone()));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a fuel plan by hand: product, servings and timing per intake.
pub fn collect_plan_items(products: &[FuelProduct], duration_minutes: u32) -> Result<FuelPlan> {
    if products.is_empty() {
        return Err(GiError::NoProducts);
    }

    let mut plan = FuelPlan::new();

    while let Some(product) = prompt_product(products)? {
        let quantity = prompt_positive_number("Servings", "1")?;
        let timing = prompt_minutes("Minutes after start", 0)?;

        if timing >= duration_minutes {
            println!(
                "Warning: intake at minute {} is after the session ends ({} min)",
                timing, duration_minutes
            );
        }

        let item = product.plan_item(quantity, timing);
        println!("Added: {} x{} at {} min", item.product_name, quantity, timing);
        plan.push(item);
    }

    Ok(plan)
}
