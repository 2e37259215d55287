use super::ApiError;

/// Presence check for a JSON body field: missing or empty both fail.
pub fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{name} is required"))),
    }
}

pub fn validate_game_id(id: i64) -> Result<i64, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid game ID: {id}. ID must be a positive integer"
        )));
    }
    Ok(id)
}

pub fn validate_price(price: f64) -> Result<f64, ApiError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::validation(format!(
            "Invalid price: {price}. Price must be a non-negative number"
        )));
    }
    Ok(price)
}

/// Rejects blank keywords. Anything else is passed upstream as typed.
pub fn validate_search_query(query: &str) -> Result<&str, ApiError> {
    if query.trim().is_empty() {
        return Err(ApiError::validation("Search query cannot be empty"));
    }
    Ok(query)
}
