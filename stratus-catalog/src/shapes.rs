//! Shared nested shapes used across the catalog

use stratus_core::schema::{PropertySchema, PropertyType, ShapeSchema};

/// The `{Key, Value}` tag shape shared by every taggable resource
pub fn tag() -> ShapeSchema {
    ShapeSchema::new("Tag")
        .field(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .length(1, 128)
                .with_description("The tag key."),
        )
        .field(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .length(0, 256)
                .with_description("The tag value."),
        )
}

/// An array of `{Key, Value}` tags
pub fn tag_list() -> PropertyType {
    PropertyType::List(Box::new(PropertyType::Shape(tag())))
}

/// A list of plain strings (IDs, ARNs, and the like)
pub fn string_list() -> PropertyType {
    PropertyType::List(Box::new(PropertyType::String))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_requires_key_and_value() {
        let shape = tag();
        assert!(
            shape
                .validate(json!({"Key": "env", "Value": "prod"}).as_object().unwrap())
                .is_ok()
        );
        assert!(
            shape
                .validate(json!({"Key": "env"}).as_object().unwrap())
                .is_err()
        );
    }

    #[test]
    fn tag_key_length_bounds() {
        let shape = tag();
        let too_long = json!({"Key": "k".repeat(129), "Value": "v"});
        assert!(shape.validate(too_long.as_object().unwrap()).is_err());
        // Empty values are allowed, empty keys are not
        assert!(
            shape
                .validate(json!({"Key": "k", "Value": ""}).as_object().unwrap())
                .is_ok()
        );
        assert!(
            shape
                .validate(json!({"Key": "", "Value": "v"}).as_object().unwrap())
                .is_err()
        );
    }
}
