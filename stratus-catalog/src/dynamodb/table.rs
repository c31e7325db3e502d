//! table schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::DynamoDB::Table
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::{string_list, tag_list};
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn key_schema_element() -> ShapeSchema {
    ShapeSchema::new("KeySchema")
        .field(
            PropertySchema::new("AttributeName", PropertyType::String)
                .required()
                .length(1, 255)
                .with_description("The name of a key attribute."),
        )
        .field(
            PropertySchema::new(
                "KeyType",
                PropertyType::Enum(vec!["HASH".to_string(), "RANGE".to_string()]),
            )
            .required()
            .with_description("The role that this key attribute will assume: HASH (partition key) or RANGE (sort key)."),
        )
}

fn key_schema_list() -> PropertyType {
    PropertyType::List(Box::new(PropertyType::Shape(key_schema_element())))
}

fn attribute_definition() -> ShapeSchema {
    ShapeSchema::new("AttributeDefinition")
        .field(
            PropertySchema::new("AttributeName", PropertyType::String)
                .required()
                .length(1, 255)
                .with_description("A name for the attribute."),
        )
        .field(
            PropertySchema::new(
                "AttributeType",
                PropertyType::Enum(vec!["S".to_string(), "N".to_string(), "B".to_string()]),
            )
            .required()
            .with_description("The data type for the attribute: S (string), N (number), or B (binary)."),
        )
}

fn provisioned_throughput() -> ShapeSchema {
    ShapeSchema::new("ProvisionedThroughput")
        .field(
            PropertySchema::new("ReadCapacityUnits", PropertyType::Integer)
                .required()
                .with_description("The maximum number of strongly consistent reads consumed per second before DynamoDB returns a ThrottlingException."),
        )
        .field(
            PropertySchema::new("WriteCapacityUnits", PropertyType::Integer)
                .required()
                .with_description("The maximum number of writes consumed per second before DynamoDB returns a ThrottlingException."),
        )
}

fn projection() -> ShapeSchema {
    ShapeSchema::new("Projection")
        .field(PropertySchema::new(
            "ProjectionType",
            PropertyType::Enum(vec![
                "ALL".to_string(),
                "KEYS_ONLY".to_string(),
                "INCLUDE".to_string(),
            ]),
        ))
        .field(
            PropertySchema::new("NonKeyAttributes", string_list())
                .with_description("Represents the non-key attribute names which will be projected into the index."),
        )
}

fn global_secondary_index() -> ShapeSchema {
    ShapeSchema::new("GlobalSecondaryIndex")
        .field(
            PropertySchema::new("IndexName", PropertyType::String)
                .required()
                .length(3, 255)
                .with_description("The name of the global secondary index. The name must be unique among all other indexes on this table."),
        )
        .field(PropertySchema::new("KeySchema", key_schema_list()).required())
        .field(
            PropertySchema::new("Projection", PropertyType::Shape(projection()))
                .required()
                .with_description("Represents attributes that are copied (projected) from the table into the global secondary index."),
        )
        .field(PropertySchema::new(
            "ProvisionedThroughput",
            PropertyType::Shape(provisioned_throughput()),
        ))
}

fn stream_specification() -> ShapeSchema {
    ShapeSchema::new("StreamSpecification").field(
        PropertySchema::new(
            "StreamViewType",
            PropertyType::Enum(vec![
                "KEYS_ONLY".to_string(),
                "NEW_IMAGE".to_string(),
                "OLD_IMAGE".to_string(),
                "NEW_AND_OLD_IMAGES".to_string(),
            ]),
        )
        .required()
        .with_description("When an item in the table is modified, StreamViewType determines what information is written to the stream for this table."),
    )
}

fn time_to_live_specification() -> ShapeSchema {
    ShapeSchema::new("TimeToLiveSpecification")
        .field(
            PropertySchema::new("AttributeName", PropertyType::String)
                .with_description("The name of the TTL attribute used to store the expiration time for items in the table."),
        )
        .field(
            PropertySchema::new("Enabled", PropertyType::Boolean)
                .required()
                .with_description("Indicates whether TTL is to be enabled (true) or disabled (false) on the table."),
        )
}

fn sse_specification() -> ShapeSchema {
    ShapeSchema::new("SSESpecification")
        .field(
            PropertySchema::new("SSEEnabled", PropertyType::Boolean)
                .required()
                .with_description("Indicates whether server-side encryption is done using an AWS managed key or an AWS owned key."),
        )
        .field(PropertySchema::new(
            "SSEType",
            PropertyType::Enum(vec!["KMS".to_string()]),
        ))
        .field(
            PropertySchema::new("KMSMasterKeyId", PropertyType::String).with_description(
                "The KMS key that should be used for the KMS encryption. To specify a key, use its \
                 key ID, Amazon Resource Name (ARN), alias name, or alias ARN.",
            ),
        )
}

fn point_in_time_recovery_specification() -> ShapeSchema {
    ShapeSchema::new("PointInTimeRecoverySpecification").field(
        PropertySchema::new("PointInTimeRecoveryEnabled", PropertyType::Boolean)
            .with_description("Indicates whether point in time recovery is enabled (true) or disabled (false) on the table."),
    )
}

/// Returns the schema for AWS::DynamoDB::Table
pub fn table() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::DynamoDB::Table")
        .with_description("The ``AWS::DynamoDB::Table`` resource creates a DDB table. For more information, see CreateTable in the API Reference. You should be aware of the foll...")
        .property(
            PropertySchema::new("KeySchema", key_schema_list())
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("Specifies the attributes that make up the primary key for the table. The attributes in the ``KeySchema`` property must also be defined in the ``Attri..."),
        )
        .property(
            PropertySchema::new("AttributeDefinitions", PropertyType::List(Box::new(PropertyType::Shape(attribute_definition()))))
                .update_requires(UpdateBehavior::Conditional)
                .with_description("A list of attributes that describe the key schema for the table and indexes. This property is required to create a DDB table."),
        )
        .property(
            PropertySchema::new("TableName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(3, 255)
                .pattern(r"^[a-zA-Z0-9_.-]+$")
                .with_description("A name for the table. If you don't specify a name, CFN generates a unique physical ID and uses that ID for the table name."),
        )
        .property(
            PropertySchema::new("BillingMode", PropertyType::Enum(vec![
                "PROVISIONED".to_string(),
                "PAY_PER_REQUEST".to_string(),
            ]))
                .with_description("Specify how you are charged for read and write throughput and how you manage capacity."),
        )
        .property(
            PropertySchema::new("ProvisionedThroughput", PropertyType::Shape(provisioned_throughput()))
                .with_description("Throughput for the specified table, which consists of values for ``ReadCapacityUnits`` and ``WriteCapacityUnits``. If you set ``BillingMode`` as ``PR..."),
        )
        .property(
            PropertySchema::new("GlobalSecondaryIndexes", PropertyType::List(Box::new(PropertyType::Shape(global_secondary_index()))))
                .with_description("Global secondary indexes to be created on the table. You can create up to 20 global secondary indexes. If you update a table to include a new global..."),
        )
        .property(
            PropertySchema::new("StreamSpecification", PropertyType::Shape(stream_specification()))
                .with_description("The settings for the DDB table stream, which capture changes to items stored in the table."),
        )
        .property(
            PropertySchema::new("TimeToLiveSpecification", PropertyType::Shape(time_to_live_specification()))
                .with_description("Specifies the Time to Live (TTL) settings for the table."),
        )
        .property(
            PropertySchema::new("PointInTimeRecoverySpecification", PropertyType::Shape(point_in_time_recovery_specification()))
                .with_description("The settings used to enable point in time recovery."),
        )
        .property(
            PropertySchema::new("SSESpecification", PropertyType::Shape(sse_specification()))
                .update_requires(UpdateBehavior::Conditional)
                .with_description("Specifies the settings to enable server-side encryption."),
        )
        .property(
            PropertySchema::new("DeletionProtectionEnabled", PropertyType::Boolean)
                .with_description("Determines if a table is protected from deletion. When enabled, the table cannot be deleted by any user or process."),
        )
        .property(
            PropertySchema::new("TableClass", PropertyType::Enum(vec![
                "STANDARD".to_string(),
                "STANDARD_INFREQUENT_ACCESS".to_string(),
            ]))
                .with_description("The table class of the new table. Valid values are ``STANDARD`` and ``STANDARD_INFREQUENT_ACCESS``."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("An array of key-value pairs to apply to this resource."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) of the table."),
        )
        .property(
            PropertySchema::new("StreamArn", PropertyType::String)
                .read_only()
                .with_description("The ARN of the DynamoDB stream, such as arn:aws:dynamodb:us-east-1:123456789012:table/testddbstream/stream/2015-05-11T21:21:33.291."),
        )
}
