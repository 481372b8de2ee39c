use super::*;

impl Document {
    /// Get a value and check it with `validator`; `valid_values` describes the
    /// accepted range in the error.
    pub fn get_validated<T, F>(&self, key: &str, validator: F, valid_values: &str) -> Result<T, PackError>
    where
        T: TryFrom<Value, Error = PackError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(key)?;

        if !validator(&typed_value) {
            return Err(PackError::TypeError {
                message: format!("Invalid value for `{}`\nExpected: {}", key, valid_values),
                hint: Some(format!("Valid values are: {}", valid_values)),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a text value and check it case-insensitively against `allowed_values`.
    pub fn get_string_enum(&self, key: &str, allowed_values: &[&str]) -> Result<String, PackError> {
        let value: String = self.get(key)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|&v| v.to_lowercase() == lower_value) {
            return Err(PackError::TypeError {
                message: format!("Invalid value '{}' for `{}`", value, key),
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
