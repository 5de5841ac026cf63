//! Client-side validation rules for resource form fields

/// Whether the form is creating a new entity or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required_on_create: bool,
    pub required_on_edit: bool,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required_on_create: false,
            required_on_edit: false,
            custom_error: None,
        }
    }

    /// Required in both create and edit forms
    pub const fn required() -> Self {
        Self {
            required_on_create: true,
            required_on_edit: true,
            custom_error: None,
        }
    }

    /// Required when creating; an edit may keep the stored value
    pub const fn required_on_create() -> Self {
        Self {
            required_on_create: true,
            required_on_edit: false,
            custom_error: None,
        }
    }

    pub const fn with_error(mut self, message: &'static str) -> Self {
        self.custom_error = Some(message);
        self
    }

    pub const fn is_required(&self, mode: FormMode) -> bool {
        match mode {
            FormMode::Create => self.required_on_create,
            FormMode::Edit => self.required_on_edit,
        }
    }

    fn missing(&self, field_label: &str) -> String {
        match self.custom_error {
            Some(msg) => msg.to_string(),
            None => format!("{} is required", field_label),
        }
    }

    /// Validate a text value. Whitespace-only counts as empty.
    pub fn validate_string(
        &self,
        value: &str,
        field_label: &str,
        mode: FormMode,
    ) -> Result<(), String> {
        if self.is_required(mode) && value.trim().is_empty() {
            return Err(self.missing(field_label));
        }
        Ok(())
    }

    /// Validate a non-text value (e.g. an uploaded file) by presence only.
    pub fn validate_present(
        &self,
        present: bool,
        field_label: &str,
        mode: FormMode,
    ) -> Result<(), String> {
        if self.is_required(mode) && !present {
            return Err(self.missing(field_label));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Category name", FormMode::Create),
            Err("Category name is required".to_string())
        );
        assert!(rules.validate_string("Shoes", "Category name", FormMode::Edit).is_ok());
    }

    #[test]
    fn test_required_on_create_only() {
        let rules = ValidationRules::required_on_create();
        assert!(rules.validate_present(false, "Image", FormMode::Create).is_err());
        assert!(rules.validate_present(false, "Image", FormMode::Edit).is_ok());
    }

    #[test]
    fn test_custom_error_replaces_default() {
        let rules = ValidationRules::required().with_error("Title please");
        assert_eq!(
            rules.validate_string("", "Title", FormMode::Create),
            Err("Title please".to_string())
        );
        assert!(rules.validate_string("abcd", "Title", FormMode::Create).is_ok());
    }
}
