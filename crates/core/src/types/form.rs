//! Create-form records.
//!
//! A form is a flat record of string fields keyed by field name. The only
//! validation is the HTML `required` rule: every field must be non-empty.

/// A create form with named string fields.
pub trait FormRecord: Default + Clone {
    /// Field names paired with their current values, in form order.
    fn fields(&self) -> Vec<(&'static str, &str)>;

    /// Names of required fields that are still empty.
    fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether every required field is filled in.
    fn is_complete(&self) -> bool {
        self.fields().iter().all(|(_, value)| !value.is_empty())
    }

    /// Whether every field is empty (the freshly reset state).
    fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }
}
