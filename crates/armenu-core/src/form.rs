//! Admin form validation.
//!
//! Field values are validated before any file is read; the record itself is
//! only built once the model (and optional image) locators are available.

use crate::dish::DishRecord;
use crate::error::MenuError;

/// Raw text of the admin form plus which files were picked.
#[derive(Clone, Debug, Default)]
pub struct DishFormFields {
    pub name: String,
    pub description: String,
    pub diameter: String,
    pub height: String,
    pub price: String,
    pub has_model_file: bool,
    pub has_image_file: bool,
}

/// Validated field values, waiting for their asset locators.
#[derive(Clone, Debug, PartialEq)]
pub struct DishDraft {
    pub name: String,
    pub description: Option<String>,
    pub diameter: f64,
    pub height: f64,
    pub price: f64,
}

impl DishDraft {
    pub fn into_record(
        self,
        id: String,
        model_reference: String,
        image_reference: Option<String>,
    ) -> DishRecord {
        DishRecord {
            id,
            name: self.name,
            description: self.description,
            diameter: self.diameter,
            height: self.height,
            price: self.price,
            model_reference,
            image_reference,
        }
    }
}

pub fn validate(fields: &DishFormFields) -> Result<DishDraft, MenuError> {
    if !fields.has_model_file {
        return Err(MenuError::MissingRequiredInput("model"));
    }
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(MenuError::MissingRequiredInput("name"));
    }
    let diameter = parse_lenient_float(&fields.diameter);
    let height = parse_lenient_float(&fields.height);
    let price = parse_lenient_float(&fields.price);
    if diameter <= 0.0 {
        return Err(MenuError::InvalidInput {
            field: "diameter",
            reason: "must be greater than zero".to_string(),
        });
    }
    if height <= 0.0 {
        return Err(MenuError::InvalidInput {
            field: "height",
            reason: "must be greater than zero".to_string(),
        });
    }
    if price < 0.0 {
        return Err(MenuError::InvalidInput {
            field: "price",
            reason: "must not be negative".to_string(),
        });
    }
    let description = fields.description.trim();
    Ok(DishDraft {
        name: name.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        diameter,
        height,
        price,
    })
}

/// Parse the longest numeric prefix of `s` (after leading whitespace), the
/// way browsers read a typed number; anything unreadable becomes `0`.
pub fn parse_lenient_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
