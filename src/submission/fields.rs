use crate::models::NewSubmission;

/// A field that failed its shape check, with the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Check every field of an inbound payload against its required shape.
/// Pure function of the input; the first failing field wins.
pub fn validate(input: &NewSubmission) -> Result<(), FieldError> {
    digits("mobile_no", &input.mobile_no, 10)?;
    non_empty("shop_name", &input.shop_name)?;
    non_empty("owner_name", &input.owner_name)?;
    non_empty("ind_name", &input.ind_name)?;
    digits("area_pin_code", &input.area_pin_code, 6)?;
    non_empty("address", &input.address)?;
    non_empty("city", &input.city)?;
    non_empty("dist", &input.dist)?;
    non_empty("state", &input.state)?;
    non_empty("country", &input.country)?;
    Ok(())
}

fn digits(field: &'static str, value: &str, len: usize) -> Result<(), FieldError> {
    if value.len() != len || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError {
            field,
            message: format!("must be exactly {len} digits"),
        });
    }
    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
