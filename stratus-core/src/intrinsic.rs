//! Intrinsic functions - CloudFormation's deploy-time value placeholders
//!
//! Wherever a resource property expects a literal value, a template may
//! substitute an intrinsic function object such as `{"Ref": "MyVpc"}` or
//! `{"Fn::GetAtt": ["MyRole", "Arn"]}`. The CloudFormation engine resolves
//! these at deploy time; this crate only models their shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CloudFormation intrinsic function.
///
/// Serializes to the canonical single-key object form, e.g.
/// `IntrinsicFunction::Ref("MyVpc")` becomes `{"Ref": "MyVpc"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntrinsicFunction {
    #[serde(rename = "Ref")]
    Ref(String),
    #[serde(rename = "Fn::GetAtt")]
    GetAtt(GetAtt),
    #[serde(rename = "Fn::Sub")]
    Sub(Sub),
    /// `["delimiter", [values...]]`
    #[serde(rename = "Fn::Join")]
    Join((String, Vec<Value>)),
    /// `[index, list]` - either side may itself be an intrinsic
    #[serde(rename = "Fn::Select")]
    Select((Value, Value)),
    /// `["delimiter", source]`
    #[serde(rename = "Fn::Split")]
    Split((String, Value)),
    /// `[MapName, TopLevelKey, SecondLevelKey]`
    #[serde(rename = "Fn::FindInMap")]
    FindInMap(Vec<Value>),
    #[serde(rename = "Fn::ImportValue")]
    ImportValue(Value),
    #[serde(rename = "Fn::GetAZs")]
    GetAZs(Value),
    #[serde(rename = "Fn::Base64")]
    Base64(Value),
    /// `[ipBlock, count, cidrBits]`
    #[serde(rename = "Fn::Cidr")]
    Cidr((Value, Value, Value)),
    /// `[ConditionName, valueIfTrue, valueIfFalse]`
    #[serde(rename = "Fn::If")]
    If((String, Value, Value)),
}

/// Argument forms accepted by `Fn::GetAtt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetAtt {
    /// Dotted shorthand: `"MyRole.Arn"`
    Shorthand(String),
    /// Explicit pair: `["MyRole", "Arn"]`
    Parts(Vec<String>),
}

/// Argument forms accepted by `Fn::Sub`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sub {
    /// `"arn:aws:s3:::${BucketName}"`
    Template(String),
    /// `["template", {"Var": value}]`
    WithMap((String, serde_json::Map<String, Value>)),
}

/// Keys CloudFormation recognizes as intrinsic function invocations.
const INTRINSIC_KEYS: &[&str] = &[
    "Ref",
    "Fn::GetAtt",
    "Fn::Sub",
    "Fn::Join",
    "Fn::Select",
    "Fn::Split",
    "Fn::FindInMap",
    "Fn::ImportValue",
    "Fn::GetAZs",
    "Fn::Base64",
    "Fn::Cidr",
    "Fn::If",
];

/// Returns true if the value is a recognized intrinsic function object:
/// a JSON object with exactly one key, and that key is an intrinsic name.
pub fn is_intrinsic(value: &Value) -> bool {
    match value.as_object() {
        Some(map) if map.len() == 1 => map.keys().all(|k| INTRINSIC_KEYS.contains(&k.as_str())),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ref_serializes_to_single_key_object() {
        let f = IntrinsicFunction::Ref("MyVpc".to_string());
        assert_eq!(serde_json::to_value(&f).unwrap(), json!({"Ref": "MyVpc"}));
    }

    #[test]
    fn get_att_accepts_both_forms() {
        let shorthand: IntrinsicFunction =
            serde_json::from_value(json!({"Fn::GetAtt": "MyRole.Arn"})).unwrap();
        assert_eq!(
            shorthand,
            IntrinsicFunction::GetAtt(GetAtt::Shorthand("MyRole.Arn".to_string()))
        );

        let parts: IntrinsicFunction =
            serde_json::from_value(json!({"Fn::GetAtt": ["MyRole", "Arn"]})).unwrap();
        assert_eq!(
            parts,
            IntrinsicFunction::GetAtt(GetAtt::Parts(vec![
                "MyRole".to_string(),
                "Arn".to_string()
            ]))
        );
    }

    #[test]
    fn sub_round_trips_with_map() {
        let value = json!({"Fn::Sub": ["${Stage}-bucket", {"Stage": "prod"}]});
        let f: IntrinsicFunction = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&f).unwrap(), value);
    }

    #[test]
    fn join_round_trips() {
        let value = json!({"Fn::Join": ["-", ["a", {"Ref": "MyVpc"}]]});
        let f: IntrinsicFunction = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&f).unwrap(), value);
    }

    #[test]
    fn recognizes_intrinsic_objects() {
        assert!(is_intrinsic(&json!({"Ref": "MyVpc"})));
        assert!(is_intrinsic(&json!({"Fn::GetAtt": ["MyRole", "Arn"]})));
        assert!(is_intrinsic(&json!({"Fn::ImportValue": "shared-vpc-id"})));
    }

    #[test]
    fn rejects_non_intrinsic_objects() {
        assert!(!is_intrinsic(&json!("vpc-123")));
        assert!(!is_intrinsic(&json!({"Key": "env"})));
        // Two keys means a plain object, not an invocation
        assert!(!is_intrinsic(&json!({"Ref": "MyVpc", "Extra": 1})));
        assert!(!is_intrinsic(&json!({})));
    }
}
