//! Accessory information: the static descriptor shown next to the door
//! service (name, manufacturer, model).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Descriptor of the exposed accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryInfo {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
}

impl AccessoryInfo {
    /// Build a descriptor, rejecting an empty name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self {
            name,
            manufacturer: manufacturer.into(),
            model: model.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_info_with_all_fields() {
        let info = AccessoryInfo::new("Garage", "Custom Manufacturer", "Custom Model").unwrap();
        assert_eq!(info.name, "Garage");
        assert_eq!(info.manufacturer, "Custom Manufacturer");
        assert_eq!(info.model, "Custom Model");
    }

    #[test]
    fn should_reject_blank_name() {
        let result = AccessoryInfo::new("  ", "m", "m");
        assert!(matches!(result, Err(ValidationError::Empty { field: "name" })));
    }
}
