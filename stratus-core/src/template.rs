//! Template - the CloudFormation document envelope
//!
//! Enough structure to round-trip a template's `Resources` section through
//! serde. Parameter resolution, conditions, and deployment belong to the
//! CloudFormation engine, not this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attributes::ResourceAttributes;

/// A single resource declaration: the `Type` discriminant, the
/// `Properties` bag, and the common resource attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,

    #[serde(
        rename = "Properties",
        default,
        skip_serializing_if = "Map::is_empty"
    )]
    pub properties: Map<String, Value>,

    #[serde(flatten)]
    pub attributes: ResourceAttributes,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties: Map::new(),
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

/// A CloudFormation template document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Resources", default)]
    pub resources: BTreeMap<String, Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_round_trips() {
        let doc = json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Description": "A route table",
            "Resources": {
                "RouteTable": {
                    "Type": "AWS::EC2::RouteTable",
                    "Properties": {
                        "VpcId": {"Ref": "Vpc"},
                        "Tags": [{"Key": "env", "Value": "prod"}],
                    },
                    "DependsOn": "Vpc",
                    "DeletionPolicy": "Retain",
                },
            },
        });

        let template: Template = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(template.resources.len(), 1);
        let rt = &template.resources["RouteTable"];
        assert_eq!(rt.resource_type, "AWS::EC2::RouteTable");
        assert!(rt.properties.contains_key("VpcId"));

        assert_eq!(serde_json::to_value(&template).unwrap(), doc);
    }

    #[test]
    fn properties_default_to_empty() {
        let resource: Resource =
            serde_json::from_value(json!({"Type": "AWS::EC2::InternetGateway"})).unwrap();
        assert!(resource.properties.is_empty());
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({"Type": "AWS::EC2::InternetGateway"})
        );
    }

    #[test]
    fn builder_matches_parsed_form() {
        let built = Resource::new("AWS::EC2::RouteTable").with_property("VpcId", json!("vpc-123"));
        let parsed: Resource = serde_json::from_value(json!({
            "Type": "AWS::EC2::RouteTable",
            "Properties": {"VpcId": "vpc-123"},
        }))
        .unwrap();
        assert_eq!(built, parsed);
    }
}
