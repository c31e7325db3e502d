//! log_group schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::Logs::LogGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::Logs::LogGroup
pub fn log_group() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::Logs::LogGroup")
        .with_description("The ``AWS::Logs::LogGroup`` resource specifies a log group. A log group defines common properties for log streams, such as their retention and access...")
        .property(
            PropertySchema::new("LogGroupName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 512)
                .pattern(r"^[.\-_/#A-Za-z0-9]{1,512}$")
                .with_description("The name of the log group. If you don't specify a name, CFN generates a unique ID for the log group."),
        )
        .property(
            PropertySchema::new("RetentionInDays", PropertyType::Integer)
                .with_description("The number of days to retain the log events in the specified log group. Possible values are: 1, 3, 5, 7, 14, 30, 60, 90, 120, 150, 180, 365, 400, 545..."),
        )
        .property(
            PropertySchema::new("KmsKeyId", PropertyType::String)
                .length(0, 256)
                .pattern(r"^arn:[a-z0-9-]+:kms:[a-z0-9-]+:\d{12}:(key|alias)/.+$")
                .with_description("The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data."),
        )
        .property(
            PropertySchema::new("LogGroupClass", PropertyType::Enum(vec![
                "STANDARD".to_string(),
                "INFREQUENT_ACCESS".to_string(),
            ]))
                .with_description("Specifies the log group class for this log group. There are two classes: the Standard log class supports all CWL features; the Infrequent Access log..."),
        )
        .property(
            PropertySchema::new("DataProtectionPolicy", PropertyType::Json)
                .with_description("Creates a data protection policy and assigns it to the log group. A data protection policy can help safeguard sensitive data that's ingested by the l..."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("An array of key-value pairs to apply to the log group."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The ARN of the log group, such as arn:aws:logs:us-west-1:123456789012:log-group:/mystack-testgroup-12ABC1AB12A1:*"),
        )
}
