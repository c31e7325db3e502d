//! topic schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::SNS::Topic
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn subscription() -> ShapeSchema {
    ShapeSchema::new("Subscription")
        .field(
            PropertySchema::new("Endpoint", PropertyType::String)
                .required()
                .with_description("The endpoint that receives notifications from the Amazon SNS topic. The endpoint value depends on the protocol that you specify."),
        )
        .field(
            PropertySchema::new("Protocol", PropertyType::String)
                .required()
                .with_description("The subscription's protocol."),
        )
}

/// Returns the schema for AWS::SNS::Topic
pub fn topic() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::SNS::Topic")
        .with_description("The ``AWS::SNS::Topic`` resource creates a topic to which notifications can be published.")
        .property(
            PropertySchema::new("TopicName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 256)
                .with_description("The name of the topic you want to create. Topic names must include only uppercase and lowercase ASCII letters, numbers, underscores, and hyphens, and..."),
        )
        .property(
            PropertySchema::new("DisplayName", PropertyType::String)
                .length(0, 100)
                .with_description("The display name to use for an Amazon SNS topic with SMS subscriptions. The display name must be maximum 100 characters long, including hyphens, under..."),
        )
        .property(
            PropertySchema::new("FifoTopic", PropertyType::Boolean)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("Set to true to create a FIFO topic."),
        )
        .property(
            PropertySchema::new("ContentBasedDeduplication", PropertyType::Boolean)
                .with_description("Enables content-based deduplication for FIFO topics. By default, ``ContentBasedDeduplication`` is set to ``false``."),
        )
        .property(
            PropertySchema::new("KmsMasterKeyId", PropertyType::String)
                .with_description("The ID of an AWS managed customer master key (CMK) for Amazon SNS or a custom CMK. For more information, see Key terms."),
        )
        .property(
            PropertySchema::new("SignatureVersion", PropertyType::String)
                .with_description("The signature version corresponds to the hashing algorithm used while creating the signature of the notifications, subscription confirmations, or uns..."),
        )
        .property(
            PropertySchema::new("TracingConfig", PropertyType::String)
                .with_description("Tracing mode of an Amazon SNS topic. By default, ``TracingConfig`` is set to ``PassThrough``."),
        )
        .property(
            PropertySchema::new("Subscription", PropertyType::List(Box::new(PropertyType::Shape(subscription()))))
                .with_description("The Amazon SNS subscriptions (endpoints) for this topic. If you specify the ``Subscription`` property in the ``AWS::SNS::Topic`` resource and it creat..."),
        )
        .property(
            PropertySchema::new("DataProtectionPolicy", PropertyType::Json)
                .with_description("The body of the policy document you want to use for this topic. You can only add one policy per topic. The policy must be in JSON string format."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("The list of tags to add to a new topic."),
        )
        .property(
            PropertySchema::new("TopicArn", PropertyType::String)
                .read_only()
                .with_description("Returns the ARN of an Amazon SNS topic."),
        )
}
