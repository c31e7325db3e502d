//! Schema - property schemas for CloudFormation resource types
//!
//! Each resource type in the catalog is described by a [`ResourceTypeSchema`]:
//! the canonical `AWS::Service::Resource` type name, a property table with
//! required flags and constraints, and the nested shapes its properties refer
//! to. Validation checks a JSON property bag against the schema; an intrinsic
//! function object is accepted wherever a literal value is expected.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::intrinsic::is_intrinsic;

/// Property type
#[derive(Debug, Clone)]
pub enum PropertyType {
    /// String
    String,
    /// Integer
    Integer,
    /// Double-precision number
    Double,
    /// Boolean
    Boolean,
    /// ISO-8601 timestamp (string on the wire)
    Timestamp,
    /// Free-form JSON (policy documents and the like)
    Json,
    /// String restricted to an enumerated set of allowed values
    Enum(Vec<String>),
    /// List
    List(Box<PropertyType>),
    /// String-keyed map
    Map(Box<PropertyType>),
    /// Nested shape declared by the enclosing resource
    Shape(ShapeSchema),
}

impl PropertyType {
    /// Check if a value conforms to this type. Intrinsic function objects
    /// conform to every type, including list items and map values.
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        if is_intrinsic(value) {
            return Ok(());
        }

        match (self, value) {
            (PropertyType::String, Value::String(_)) => Ok(()),
            (PropertyType::Timestamp, Value::String(_)) => Ok(()),
            (PropertyType::Boolean, Value::Bool(_)) => Ok(()),

            (PropertyType::Integer, Value::Number(n)) => {
                if n.is_i64() || n.is_u64() {
                    Ok(())
                } else {
                    Err(TypeError::TypeMismatch {
                        expected: self.type_name(),
                        got: "Double".to_string(),
                    })
                }
            }
            (PropertyType::Double, Value::Number(_)) => Ok(()),

            // Policy documents and other free-form JSON positions accept
            // anything that parsed
            (PropertyType::Json, _) => Ok(()),

            (PropertyType::Enum(allowed), Value::String(s)) => {
                if allowed.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumValue {
                        value: s.clone(),
                        expected: allowed.clone(),
                    })
                }
            }

            (PropertyType::List(inner), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItem {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (PropertyType::Map(inner), Value::Object(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValue {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (PropertyType::Shape(shape), Value::Object(map)) => shape.validate(map),

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: json_type_name(value),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            PropertyType::String => "String".to_string(),
            PropertyType::Integer => "Integer".to_string(),
            PropertyType::Double => "Double".to_string(),
            PropertyType::Boolean => "Boolean".to_string(),
            PropertyType::Timestamp => "Timestamp".to_string(),
            PropertyType::Json => "Json".to_string(),
            PropertyType::Enum(allowed) => format!("Enum({})", allowed.join(" | ")),
            PropertyType::List(inner) => format!("List<{}>", inner.type_name()),
            PropertyType::Map(inner) => format!("Map<{}>", inner.type_name()),
            PropertyType::Shape(shape) => shape.name.clone(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn json_type_name(value: &Value) -> String {
    match value {
        Value::Null => "Null".to_string(),
        Value::Bool(_) => "Boolean".to_string(),
        Value::Number(n) if n.is_i64() || n.is_u64() => "Integer".to_string(),
        Value::Number(_) => "Double".to_string(),
        Value::String(_) => "String".to_string(),
        Value::Array(_) => "List".to_string(),
        Value::Object(_) => "Map".to_string(),
    }
}

/// Type error
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid value '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumValue {
        value: String,
        expected: Vec<String>,
    },

    #[error("Required property '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("Property '{name}' is read-only")]
    ReadOnlyProperty { name: String },

    #[error("Unknown resource type '{type_name}'")]
    UnknownResourceType { type_name: String },

    #[error("Value '{value}' does not match pattern '{pattern}'")]
    PatternMismatch { value: String, pattern: String },

    #[error("Invalid pattern '{pattern}' in schema: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Length {length} is out of range {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Value {value} is out of range {min}..={max}")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("List item at index {index}: {inner}")]
    ListItem { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValue { key: String, inner: Box<TypeError> },

    #[error("Field '{field}': {inner}")]
    ShapeField { field: String, inner: Box<TypeError> },
}

/// How CloudFormation applies a change to a property
/// (the docs' "update requires" classification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateBehavior {
    /// Updated in place, no interruption
    #[default]
    Mutable,
    /// Changing the value replaces the resource
    Replacement,
    /// Replacement depends on the other properties or the new value
    Conditional,
}

/// Property schema
///
/// Carries the flags and constraints the AWS resource provider schema
/// declares for one property: required/optional status, read-only status,
/// update behavior, length/range/pattern constraints, and doc text.
#[derive(Debug, Clone)]
pub struct PropertySchema {
    pub name: String,
    pub property_type: PropertyType,
    pub required: bool,
    /// Attribute-only output such as `VpcId` on `AWS::EC2::VPC`; rejected
    /// when supplied as an input
    pub read_only: bool,
    pub update_requires: UpdateBehavior,
    pub description: Option<String>,
    pub pattern: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            required: false,
            read_only: false,
            update_requires: UpdateBehavior::Mutable,
            description: None,
            pattern: None,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn update_requires(mut self, behavior: UpdateBehavior) -> Self {
        self.update_requires = behavior;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Check a value against the declared type and constraints.
    /// Intrinsic function objects pass unconditionally; constraints only
    /// apply to resolved literals, which this catalog never sees.
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        if is_intrinsic(value) {
            return Ok(());
        }
        self.property_type.validate(value)?;
        self.check_constraints(value)
    }

    fn check_constraints(&self, value: &Value) -> Result<(), TypeError> {
        if let Value::String(s) = value {
            let length = s.chars().count();
            let min = self.min_length.unwrap_or(0);
            let max = self.max_length.unwrap_or(usize::MAX);
            if length < min || length > max {
                return Err(TypeError::LengthOutOfRange { length, min, max });
            }
            if let Some(pattern) = &self.pattern {
                let re = Regex::new(pattern).map_err(|e| TypeError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                if !re.is_match(s) {
                    return Err(TypeError::PatternMismatch {
                        value: s.clone(),
                        pattern: pattern.clone(),
                    });
                }
            }
        }

        if let Some(n) = value.as_f64() {
            let min = self.min_value.unwrap_or(f64::NEG_INFINITY);
            let max = self.max_value.unwrap_or(f64::INFINITY);
            if n < min || n > max {
                return Err(TypeError::ValueOutOfRange { value: n, min, max });
            }
        }

        Ok(())
    }
}

/// Nested shape schema
///
/// An auxiliary object shape used by one or more properties of the
/// enclosing resource (e.g. `Tag`, `VersioningConfiguration`). Field names
/// are unique within a shape; shape names may repeat across resources.
#[derive(Debug, Clone)]
pub struct ShapeSchema {
    pub name: String,
    pub fields: Vec<PropertySchema>,
}

impl ShapeSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, schema: PropertySchema) -> Self {
        self.fields.push(schema);
        self
    }

    /// Validate an object against this shape: required fields present,
    /// no unknown fields, every field conforming. Returns the first error.
    pub fn validate(&self, map: &serde_json::Map<String, Value>) -> Result<(), TypeError> {
        for field in &self.fields {
            if field.required && !map.contains_key(&field.name) {
                return Err(TypeError::MissingRequired {
                    name: field.name.clone(),
                });
            }
        }

        for (name, value) in map {
            let field = self
                .fields
                .iter()
                .find(|f| &f.name == name)
                .ok_or_else(|| TypeError::UnknownProperty { name: name.clone() })?;
            field.validate(value).map_err(|e| TypeError::ShapeField {
                field: name.clone(),
                inner: Box::new(e),
            })?;
        }

        Ok(())
    }
}

/// Resource type schema
#[derive(Debug, Clone)]
pub struct ResourceTypeSchema {
    /// Canonical CloudFormation type name, e.g. `AWS::EC2::RouteTable`
    pub type_name: String,
    pub properties: HashMap<String, PropertySchema>,
    pub description: Option<String>,
}

impl ResourceTypeSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: HashMap::new(),
            description: None,
        }
    }

    pub fn property(mut self, schema: PropertySchema) -> Self {
        self.properties.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Validate a `Properties` bag against this schema, collecting every
    /// error rather than stopping at the first.
    pub fn validate(
        &self,
        properties: &serde_json::Map<String, Value>,
    ) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        for (name, schema) in &self.properties {
            if schema.required && !properties.contains_key(name) {
                errors.push(TypeError::MissingRequired { name: name.clone() });
            }
        }

        for (name, value) in properties {
            match self.properties.get(name) {
                None => errors.push(TypeError::UnknownProperty { name: name.clone() }),
                Some(schema) if schema.read_only => {
                    errors.push(TypeError::ReadOnlyProperty { name: name.clone() })
                }
                Some(schema) => {
                    if let Err(e) = schema.validate(value) {
                        errors.push(e);
                    }
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag_shape() -> ShapeSchema {
        ShapeSchema::new("Tag")
            .field(PropertySchema::new("Key", PropertyType::String).required())
            .field(PropertySchema::new("Value", PropertyType::String).required())
    }

    #[test]
    fn validate_string_type() {
        let t = PropertyType::String;
        assert!(t.validate(&json!("hello")).is_ok());
        assert!(t.validate(&json!(42)).is_err());
    }

    #[test]
    fn validate_integer_rejects_fractional() {
        let t = PropertyType::Integer;
        assert!(t.validate(&json!(42)).is_ok());
        assert!(t.validate(&json!(1.5)).is_err());
        assert!(PropertyType::Double.validate(&json!(1.5)).is_ok());
    }

    #[test]
    fn validate_timestamp_type() {
        let t = PropertyType::Timestamp;
        assert!(t.validate(&json!("2024-01-15T10:30:00Z")).is_ok());
        assert!(t.validate(&json!(1705314600)).is_err());
    }

    #[test]
    fn validate_enum_type() {
        let t = PropertyType::Enum(vec!["Enabled".to_string(), "Suspended".to_string()]);
        assert!(t.validate(&json!("Enabled")).is_ok());
        assert!(t.validate(&json!("enabled")).is_err());
        assert!(t.validate(&json!("Disabled")).is_err());
    }

    #[test]
    fn intrinsic_passes_any_type() {
        let reference = json!({"Ref": "MyVpc"});
        assert!(PropertyType::String.validate(&reference).is_ok());
        assert!(PropertyType::Integer.validate(&reference).is_ok());
        assert!(PropertyType::Shape(tag_shape()).validate(&reference).is_ok());
    }

    #[test]
    fn intrinsic_passes_inside_lists() {
        let t = PropertyType::List(Box::new(PropertyType::String));
        assert!(
            t.validate(&json!(["subnet-1", {"Fn::ImportValue": "shared-subnet"}]))
                .is_ok()
        );
    }

    #[test]
    fn shape_requires_fields() {
        let t = PropertyType::Shape(tag_shape());
        assert!(t.validate(&json!({"Key": "env", "Value": "prod"})).is_ok());

        let err = t.validate(&json!({"Key": "env"})).unwrap_err();
        assert!(matches!(err, TypeError::MissingRequired { name } if name == "Value"));
    }

    #[test]
    fn shape_rejects_unknown_fields() {
        let t = PropertyType::Shape(tag_shape());
        let err = t
            .validate(&json!({"Key": "env", "Value": "prod", "Extra": 1}))
            .unwrap_err();
        assert!(matches!(err, TypeError::UnknownProperty { name } if name == "Extra"));
    }

    #[test]
    fn length_constraint() {
        let schema = PropertySchema::new("BucketName", PropertyType::String).length(3, 63);
        assert!(schema.validate(&json!("my-bucket")).is_ok());
        assert!(schema.validate(&json!("ab")).is_err());
        assert!(schema.validate(&json!("a".repeat(64))).is_err());
    }

    #[test]
    fn pattern_constraint() {
        let schema =
            PropertySchema::new("SourceAccount", PropertyType::String).pattern(r"^\d{12}$");
        assert!(schema.validate(&json!("123456789012")).is_ok());
        assert!(schema.validate(&json!("not-an-account")).is_err());
    }

    #[test]
    fn range_constraint() {
        let schema = PropertySchema::new("DelaySeconds", PropertyType::Integer).range(0.0, 900.0);
        assert!(schema.validate(&json!(60)).is_ok());
        assert!(schema.validate(&json!(901)).is_err());
        assert!(schema.validate(&json!(-1)).is_err());
    }

    #[test]
    fn validate_resource_schema() {
        let schema = ResourceTypeSchema::new("AWS::Example::Widget")
            .property(PropertySchema::new("Name", PropertyType::String).required())
            .property(PropertySchema::new("Count", PropertyType::Integer))
            .property(PropertySchema::new("Enabled", PropertyType::Boolean));

        let props = json!({"Name": "widget", "Count": 5, "Enabled": true});
        assert!(schema.validate(props.as_object().unwrap()).is_ok());
    }

    #[test]
    fn missing_required_property() {
        let schema = ResourceTypeSchema::new("AWS::Example::Widget")
            .property(PropertySchema::new("Name", PropertyType::String).required());

        let empty = serde_json::Map::new();
        let errors = schema.validate(&empty).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], TypeError::MissingRequired { name } if name == "Name"));
    }

    #[test]
    fn unknown_property_rejected() {
        let schema = ResourceTypeSchema::new("AWS::Example::Widget")
            .property(PropertySchema::new("Name", PropertyType::String));

        let props = json!({"Nmae": "typo"});
        let errors = schema.validate(props.as_object().unwrap()).unwrap_err();
        assert!(matches!(&errors[0], TypeError::UnknownProperty { name } if name == "Nmae"));
    }

    #[test]
    fn read_only_property_rejected_as_input() {
        let schema = ResourceTypeSchema::new("AWS::Example::Widget")
            .property(PropertySchema::new("WidgetId", PropertyType::String).read_only());

        let props = json!({"WidgetId": "w-123"});
        let errors = schema.validate(props.as_object().unwrap()).unwrap_err();
        assert!(matches!(&errors[0], TypeError::ReadOnlyProperty { name } if name == "WidgetId"));
    }

    #[test]
    fn collects_multiple_errors() {
        let schema = ResourceTypeSchema::new("AWS::Example::Widget")
            .property(PropertySchema::new("Name", PropertyType::String).required())
            .property(PropertySchema::new("Count", PropertyType::Integer));

        let props = json!({"Count": "three", "Color": "red"});
        let errors = schema.validate(props.as_object().unwrap()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
