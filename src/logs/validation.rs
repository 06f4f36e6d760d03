/// Normalized output of a successful validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLog {
    pub food_items: Vec<String>,
    pub calories: i64,
}

/// Validates raw form input against the server's constraints.
///
/// Food items are comma-separated; pieces are trimmed and empty pieces
/// dropped, preserving order. Every applicable violation is collected before
/// returning, so one submission can report several messages at once.
///
/// Calories use a strict base-10 integer parse: surrounding whitespace is
/// tolerated, but trailing garbage ("12abc") and fractions ("12.5") are
/// rejected.
pub fn validate_entry(
    food_items_text: &str,
    calories_text: &str,
) -> Result<ValidatedLog, Vec<String>> {
    let mut violations = Vec::new();

    let food_items: Vec<String> = food_items_text
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect();

    if food_items.is_empty() {
        violations.push("Food items cannot be empty".to_string());
    }
    if food_items.len() > 10 {
        violations.push("Cannot exceed 10 food items".to_string());
    }
    let total_len: usize = food_items.iter().map(|item| item.len()).sum();
    if total_len > 1000 {
        violations.push("Total food items text cannot exceed 1000 characters".to_string());
    }

    let calories = match calories_text.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Some(n),
        _ => {
            violations.push("Calories must be a non-negative number".to_string());
            None
        }
    };

    match (violations.is_empty(), calories) {
        (true, Some(calories)) => Ok(ValidatedLog {
            food_items,
            calories,
        }),
        _ => Err(violations),
    }
}
