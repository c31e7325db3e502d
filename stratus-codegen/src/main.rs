//! CloudFormation Resource Provider Schema to Stratus Catalog Generator
//!
//! This tool generates catalog source files for stratus-catalog from AWS
//! CloudFormation resource provider schemas.
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type \
//!     --type RESOURCE --type-name AWS::EC2::RouteTable --query 'Schema' --output text | \
//!     stratus-codegen --type-name AWS::EC2::RouteTable
//!
//!   # Generate from file
//!   stratus-codegen --file schema.json --type-name AWS::EC2::RouteTable

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use heck::ToSnakeCase;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "stratus-codegen")]
#[command(about = "Generate Stratus catalog schemas from CloudFormation resource provider schemas")]
struct Args {
    /// CloudFormation type name (e.g., AWS::EC2::RouteTable)
    #[arg(long)]
    type_name: String,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

/// CloudFormation Resource Provider Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct CfnSchema {
    type_name: String,
    description: Option<String>,
    properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    read_only_properties: Vec<String>,
    #[serde(default)]
    create_only_properties: Vec<String>,
    #[serde(default)]
    conditional_create_only_properties: Vec<String>,
    #[serde(default)]
    write_only_properties: Vec<String>,
    primary_identifier: Option<Vec<String>>,
    definitions: Option<BTreeMap<String, CfnDefinition>>,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) => v.first().map(|s| s.as_str()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct CfnProperty {
    #[serde(rename = "type")]
    prop_type: Option<TypeValue>,
    description: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<String>>,
    items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    ref_path: Option<String>,
    format: Option<String>,
    pattern: Option<String>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    #[serde(default)]
    insertion_order: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct CfnDefinition {
    #[serde(rename = "type")]
    def_type: Option<String>,
    properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    required: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read schema JSON
    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    // Parse schema
    let schema: CfnSchema = serde_json::from_str(&schema_json)
        .context("Failed to parse CloudFormation resource provider schema")?;

    // Generate code
    let code = generate_schema_code(&schema, &args.type_name)?;

    // Output
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        println!("{}", code);
    }

    Ok(())
}

/// Strips the `/properties/` prefix CloudFormation uses in property pointers.
fn pointer_set(pointers: &[String]) -> HashSet<String> {
    pointers
        .iter()
        .map(|p| p.trim_start_matches("/properties/").to_string())
        .collect()
}

fn generate_schema_code(schema: &CfnSchema, type_name: &str) -> Result<String> {
    // Parse type name: AWS::EC2::RouteTable -> route_table
    let parts: Vec<&str> = type_name.split("::").collect();
    if parts.len() != 3 {
        anyhow::bail!("Invalid type name format: {}", type_name);
    }
    let resource = parts[2].to_snake_case();

    let read_only = pointer_set(&schema.read_only_properties);
    let create_only = pointer_set(&schema.create_only_properties);
    let conditional = pointer_set(&schema.conditional_create_only_properties);
    let required: HashSet<String> = schema.required.iter().cloned().collect();

    // Collect the definitions that property types refer to, transitively,
    // so a local shape fn is emitted for each
    let used_defs = collect_used_definitions(schema);

    // Pre-render the property table to know which imports are needed
    let mut property_code = String::new();
    let mut needs_update_behavior = false;

    for (prop_name, prop) in &schema.properties {
        let type_expr = property_type_expr(prop, prop_name);

        let mut attr = format!(
            "        .property(\n            PropertySchema::new(\"{}\", {})",
            prop_name, type_expr
        );

        let is_read_only = read_only.contains(prop_name);
        if required.contains(prop_name) && !is_read_only {
            attr.push_str("\n                .required()");
        }
        if is_read_only {
            attr.push_str("\n                .read_only()");
        } else if create_only.contains(prop_name) {
            attr.push_str("\n                .update_requires(UpdateBehavior::Replacement)");
            needs_update_behavior = true;
        } else if conditional.contains(prop_name) {
            attr.push_str("\n                .update_requires(UpdateBehavior::Conditional)");
            needs_update_behavior = true;
        }

        attr.push_str(&constraint_calls(prop));

        if let Some(desc) = &prop.description {
            attr.push_str(&format!(
                "\n                .with_description(\"{}\")",
                escape_description(desc, 150)
            ));
        }

        attr.push_str(",\n        )\n");
        property_code.push_str(&attr);
    }

    // Shape fns for the referenced definitions
    let mut defs_code = String::new();
    for def_name in &used_defs {
        if let Some(defs) = &schema.definitions {
            if let Some(def) = defs.get(def_name) {
                defs_code.push_str(&definition_fn(def_name, def));
                defs_code.push('\n');
            }
        }
    }

    // Header
    let mut code = format!(
        r#"//! {} schema definition
//!
//! Generated from CloudFormation resource provider schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

"#,
        resource, type_name
    );

    let rendered = format!("{}{}", defs_code, property_code);
    let mut shape_helpers = Vec::new();
    if rendered.contains("string_list()") {
        shape_helpers.push("string_list");
    }
    if rendered.contains("tag()") {
        shape_helpers.push("tag");
    }
    if rendered.contains("tag_list()") {
        shape_helpers.push("tag_list");
    }
    match shape_helpers.as_slice() {
        [] => {}
        [one] => code.push_str(&format!("use crate::shapes::{};\n", one)),
        many => code.push_str(&format!("use crate::shapes::{{{}}};\n", many.join(", "))),
    }

    let mut imports = vec!["PropertySchema", "PropertyType", "ResourceTypeSchema"];
    if !defs_code.is_empty() {
        imports.insert(2, "ShapeSchema");
    }
    if needs_update_behavior {
        imports.push("UpdateBehavior");
    }
    code.push_str(&format!(
        "use stratus_core::schema::{{{}}};\n\n",
        imports.join(", ")
    ));

    code.push_str(&defs_code);

    // Schema fn
    code.push_str(&format!(
        r#"/// Returns the schema for {}
pub fn {}() -> ResourceTypeSchema {{
    ResourceTypeSchema::new("{}")
"#,
        type_name, resource, type_name
    ));

    if let Some(desc) = &schema.description {
        code.push_str(&format!(
            "        .with_description(\"{}\")\n",
            escape_description(desc, 200)
        ));
    }

    code.push_str(&property_code);
    code.push_str("}\n");

    Ok(code)
}

/// Walks every property and definition, returning the definition names the
/// emitted schema will need a local shape fn for.
fn collect_used_definitions(schema: &CfnSchema) -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    let mut queue: Vec<String> = Vec::new();

    for prop in schema.properties.values() {
        collect_refs(prop, &mut queue);
    }

    while let Some(name) = queue.pop() {
        if name == "Tag" || !used.insert(name.clone()) {
            continue;
        }
        if let Some(defs) = &schema.definitions {
            if let Some(def) = defs.get(&name) {
                if let Some(props) = &def.properties {
                    for prop in props.values() {
                        collect_refs(prop, &mut queue);
                    }
                }
            }
        }
    }

    used
}

fn collect_refs(prop: &CfnProperty, queue: &mut Vec<String>) {
    if let Some(ref_path) = &prop.ref_path {
        queue.push(ref_path.trim_start_matches("#/definitions/").to_string());
    }
    if let Some(items) = &prop.items {
        collect_refs(items, queue);
    }
}

/// Renders the `PropertyType` expression for one property.
fn property_type_expr(prop: &CfnProperty, prop_name: &str) -> String {
    if let Some(ref_path) = &prop.ref_path {
        let def_name = ref_path.trim_start_matches("#/definitions/");
        if def_name == "Tag" {
            return "PropertyType::Shape(tag())".to_string();
        }
        return format!("PropertyType::Shape({}())", def_name.to_snake_case());
    }

    if let Some(enum_values) = &prop.enum_values {
        let values: Vec<String> = enum_values
            .iter()
            .map(|v| format!("\n                \"{}\".to_string(),", v))
            .collect();
        return format!(
            "PropertyType::Enum(vec![{}\n            ])",
            values.join("")
        );
    }

    match prop.prop_type.as_ref().and_then(|t| t.as_str()) {
        Some("string") => match prop.format.as_deref() {
            Some("timestamp") | Some("date-time") => "PropertyType::Timestamp".to_string(),
            _ => "PropertyType::String".to_string(),
        },
        Some("boolean") => "PropertyType::Boolean".to_string(),
        Some("integer") => "PropertyType::Integer".to_string(),
        Some("number") => "PropertyType::Double".to_string(),
        Some("array") => {
            if let Some(items) = &prop.items {
                if items.ref_path.as_deref() == Some("#/definitions/Tag") {
                    return "tag_list()".to_string();
                }
                let item_type = property_type_expr(items, prop_name);
                if item_type == "PropertyType::String" {
                    return "string_list()".to_string();
                }
                format!("PropertyType::List(Box::new({}))", item_type)
            } else {
                "string_list()".to_string()
            }
        }
        // Untyped objects are policy documents and similar free-form JSON
        Some("object") | None => "PropertyType::Json".to_string(),
        _ => "PropertyType::String".to_string(),
    }
}

/// Renders the chained constraint builder calls for one property.
fn constraint_calls(prop: &CfnProperty) -> String {
    let mut calls = String::new();
    // One-sided bounds are emitted with the open side left unconstrained
    match (prop.min_length, prop.max_length) {
        (None, None) => {}
        (min, max) => {
            let min = min.map_or("0".to_string(), |v| v.to_string());
            let max = max.map_or("usize::MAX".to_string(), |v| v.to_string());
            calls.push_str(&format!("\n                .length({}, {})", min, max));
        }
    }
    match (prop.minimum, prop.maximum) {
        (None, None) => {}
        (min, max) => {
            let min = min.map_or("f64::MIN".to_string(), |v| format!("{:?}", v));
            let max = max.map_or("f64::MAX".to_string(), |v| format!("{:?}", v));
            calls.push_str(&format!("\n                .range({}, {})", min, max));
        }
    }
    if let Some(pattern) = &prop.pattern {
        calls.push_str(&format!("\n                .pattern(r#\"{}\"#)", pattern));
    }
    calls
}

/// Renders a local `fn <name>() -> ShapeSchema` for one definition.
fn definition_fn(name: &str, def: &CfnDefinition) -> String {
    let required: HashSet<&str> = def.required.iter().map(String::as_str).collect();
    let mut code = format!(
        "fn {}() -> ShapeSchema {{\n    ShapeSchema::new(\"{}\")\n",
        name.to_snake_case(),
        name
    );

    if let Some(props) = &def.properties {
        for (field_name, field) in props {
            let type_expr = property_type_expr(field, field_name);
            code.push_str(&format!(
                "        .field(PropertySchema::new(\"{}\", {})",
                field_name, type_expr
            ));
            if required.contains(field_name.as_str()) {
                code.push_str(".required()");
            }
            code.push_str(&constraint_calls(field).replace("\n                ", ""));
            if let Some(desc) = &field.description {
                code.push_str(&format!(
                    ".with_description(\"{}\")",
                    escape_description(desc, 150)
                ));
            }
            code.push_str(")\n");
        }
    }

    code.push_str("}\n");
    code
}

/// Flattens and escapes AWS doc text, truncating at `limit` characters the
/// way the committed catalog files do.
fn escape_description(desc: &str, limit: usize) -> String {
    let escaped = desc
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
        .replace("  ", " ");
    if escaped.chars().count() > limit {
        let truncated: String = escaped.chars().take(limit).collect();
        format!("{}...", truncated.trim_end())
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CfnSchema {
        serde_json::from_str(json).unwrap()
    }

    const ROUTE_TABLE: &str = r##"{
        "typeName": "AWS::EC2::RouteTable",
        "description": "Specifies a route table for the specified VPC.",
        "properties": {
            "VpcId": {"type": "string", "description": "The ID of the VPC."},
            "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
            "RouteTableId": {"type": "string"}
        },
        "required": ["VpcId"],
        "createOnlyProperties": ["/properties/VpcId"],
        "readOnlyProperties": ["/properties/RouteTableId"],
        "definitions": {
            "Tag": {
                "type": "object",
                "properties": {
                    "Key": {"type": "string"},
                    "Value": {"type": "string"}
                },
                "required": ["Key", "Value"]
            }
        }
    }"##;

    #[test]
    fn generates_route_table_schema() {
        let schema = parse(ROUTE_TABLE);
        let code = generate_schema_code(&schema, "AWS::EC2::RouteTable").unwrap();

        assert!(code.contains("pub fn route_table() -> ResourceTypeSchema"));
        assert!(code.contains("ResourceTypeSchema::new(\"AWS::EC2::RouteTable\")"));
        assert!(code.contains("PropertySchema::new(\"VpcId\", PropertyType::String)"));
        assert!(code.contains(".required()"));
        assert!(code.contains(".update_requires(UpdateBehavior::Replacement)"));
        assert!(code.contains("PropertySchema::new(\"Tags\", tag_list())"));
        assert!(code.contains("PropertySchema::new(\"RouteTableId\", PropertyType::String)"));
        assert!(code.contains(".read_only()"));
        // Tag is shared, not re-emitted locally
        assert!(!code.contains("fn tag() -> ShapeSchema"));
    }

    #[test]
    fn maps_json_schema_types() {
        let prop = |json: &str| -> CfnProperty { serde_json::from_str(json).unwrap() };

        assert_eq!(
            property_type_expr(&prop(r#"{"type": "string"}"#), "Name"),
            "PropertyType::String"
        );
        assert_eq!(
            property_type_expr(&prop(r#"{"type": "integer"}"#), "Count"),
            "PropertyType::Integer"
        );
        assert_eq!(
            property_type_expr(&prop(r#"{"type": "number"}"#), "Threshold"),
            "PropertyType::Double"
        );
        assert_eq!(
            property_type_expr(
                &prop(r#"{"type": "string", "format": "date-time"}"#),
                "CreatedTime"
            ),
            "PropertyType::Timestamp"
        );
        assert_eq!(
            property_type_expr(&prop(r#"{"type": "object"}"#), "PolicyDocument"),
            "PropertyType::Json"
        );
        assert_eq!(
            property_type_expr(
                &prop(r#"{"type": "array", "items": {"type": "string"}}"#),
                "Ids"
            ),
            "string_list()"
        );
        assert_eq!(
            property_type_expr(
                &prop(r#"{"type": "array", "items": {"type": "integer"}}"#),
                "Ports"
            ),
            "PropertyType::List(Box::new(PropertyType::Integer))"
        );
    }

    #[test]
    fn type_value_accepts_string_or_array() {
        let prop: CfnProperty = serde_json::from_str(r#"{"type": ["string", "object"]}"#).unwrap();
        assert_eq!(prop.prop_type.unwrap().as_str(), Some("string"));
    }

    #[test]
    fn emits_constraints() {
        let schema = parse(
            r#"{
                "typeName": "AWS::SQS::Queue",
                "properties": {
                    "QueueName": {"type": "string", "minLength": 1, "maxLength": 80},
                    "DelaySeconds": {"type": "integer", "minimum": 0, "maximum": 900}
                }
            }"#,
        );
        let code = generate_schema_code(&schema, "AWS::SQS::Queue").unwrap();
        assert!(code.contains(".length(1, 80)"));
        assert!(code.contains(".range(0.0, 900.0)"));
    }

    #[test]
    fn emits_one_sided_constraints() {
        let schema = parse(
            r#"{
                "typeName": "AWS::KMS::Key",
                "properties": {
                    "Description": {"type": "string", "maxLength": 8192},
                    "PendingWindowInDays": {"type": "integer", "minimum": 7}
                }
            }"#,
        );
        let code = generate_schema_code(&schema, "AWS::KMS::Key").unwrap();
        assert!(code.contains(".length(0, 8192)"));
        assert!(code.contains(".range(7.0, f64::MAX)"));
    }

    #[test]
    fn emits_local_shape_for_definitions() {
        let schema = parse(
            r##"{
                "typeName": "AWS::S3::Bucket",
                "properties": {
                    "VersioningConfiguration": {"$ref": "#/definitions/VersioningConfiguration"}
                },
                "definitions": {
                    "VersioningConfiguration": {
                        "type": "object",
                        "properties": {
                            "Status": {"type": "string", "enum": ["Enabled", "Suspended"]}
                        },
                        "required": ["Status"]
                    }
                }
            }"##,
        );
        let code = generate_schema_code(&schema, "AWS::S3::Bucket").unwrap();
        assert!(code.contains("fn versioning_configuration() -> ShapeSchema"));
        assert!(code.contains("ShapeSchema::new(\"VersioningConfiguration\")"));
        assert!(code.contains("PropertyType::Shape(versioning_configuration())"));
        assert!(code.contains("\"Enabled\".to_string()"));
    }

    #[test]
    fn rejects_malformed_type_name() {
        let schema = parse(r#"{"typeName": "Custom::Thing", "properties": {}}"#);
        assert!(generate_schema_code(&schema, "Custom::Thing").is_err());
    }

    #[test]
    fn truncates_long_descriptions() {
        let long = "x".repeat(400);
        let escaped = escape_description(&long, 150);
        assert!(escaped.ends_with("..."));
        assert_eq!(escaped.chars().count(), 153);
    }
}
