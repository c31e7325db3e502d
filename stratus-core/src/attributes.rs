//! Resource attributes - the common fields every CloudFormation resource
//! declaration may carry alongside `Type` and `Properties`

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Policy applied when a resource is removed from a stack (`DeletionPolicy`)
/// or replaced during an update (`UpdateReplacePolicy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// `DependsOn` accepts a single logical ID or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

/// Common resource attributes.
///
/// All fields are optional and omitted from serialized output when absent,
/// so a resource declared with none of them round-trips to just
/// `{"Type": ..., "Properties": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    #[serde(rename = "DependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,

    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(
        rename = "DeletionPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_policy: Option<DeletionPolicy>,

    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<DeletionPolicy>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_attributes_serialize_to_nothing() {
        let attrs = ResourceAttributes::default();
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({}));
    }

    #[test]
    fn depends_on_accepts_string_or_list() {
        let one: ResourceAttributes =
            serde_json::from_value(json!({"DependsOn": "GatewayAttachment"})).unwrap();
        assert_eq!(
            one.depends_on,
            Some(DependsOn::One("GatewayAttachment".to_string()))
        );

        let many: ResourceAttributes =
            serde_json::from_value(json!({"DependsOn": ["Vpc", "Igw"]})).unwrap();
        assert_eq!(
            many.depends_on,
            Some(DependsOn::Many(vec!["Vpc".to_string(), "Igw".to_string()]))
        );
    }

    #[test]
    fn deletion_policy_round_trips() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "DeletionPolicy": "Retain",
            "UpdateReplacePolicy": "Snapshot",
        }))
        .unwrap();
        assert_eq!(attrs.deletion_policy, Some(DeletionPolicy::Retain));
        assert_eq!(attrs.update_replace_policy, Some(DeletionPolicy::Snapshot));
        assert_eq!(
            serde_json::to_value(&attrs).unwrap(),
            json!({"DeletionPolicy": "Retain", "UpdateReplacePolicy": "Snapshot"})
        );
    }

    #[test]
    fn unknown_policy_value_is_rejected() {
        let result: Result<ResourceAttributes, _> =
            serde_json::from_value(json!({"DeletionPolicy": "Keep"}));
        assert!(result.is_err());
    }
}
