//! subscription schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::SNS::Subscription
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::SNS::Subscription
pub fn subscription() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::SNS::Subscription")
        .with_description("The ``AWS::SNS::Subscription`` resource subscribes an endpoint to an Amazon SNS topic. For a subscription to be created, the owner of the endpoint mus...")
        .property(
            PropertySchema::new("Protocol", PropertyType::Enum(vec![
                "http".to_string(),
                "https".to_string(),
                "email".to_string(),
                "email-json".to_string(),
                "sms".to_string(),
                "sqs".to_string(),
                "application".to_string(),
                "lambda".to_string(),
                "firehose".to_string(),
            ]))
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The subscription's protocol."),
        )
        .property(
            PropertySchema::new("TopicArn", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ARN of the topic to subscribe to."),
        )
        .property(
            PropertySchema::new("Endpoint", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The subscription's endpoint. The endpoint value depends on the protocol that you specify."),
        )
        .property(
            PropertySchema::new("FilterPolicy", PropertyType::Json)
                .with_description("The filter policy JSON assigned to the subscription. Enables the subscriber to filter out messages."),
        )
        .property(
            PropertySchema::new("FilterPolicyScope", PropertyType::Enum(vec![
                "MessageAttributes".to_string(),
                "MessageBody".to_string(),
            ]))
                .with_description("This attribute lets you choose the filtering scope by using one of the following string value types: MessageAttributes (default) and MessageBody."),
        )
        .property(
            PropertySchema::new("RawMessageDelivery", PropertyType::Boolean)
                .with_description("When set to true, enables raw message delivery. Raw messages don't contain any JSON formatting and can be sent to Amazon SQS and HTTP/S endpoints."),
        )
        .property(
            PropertySchema::new("DeliveryPolicy", PropertyType::Json)
                .with_description("The delivery policy JSON assigned to the subscription. Enables the subscriber to define the message delivery retry strategy in the case of an HTTP/S..."),
        )
        .property(
            PropertySchema::new("RedrivePolicy", PropertyType::Json)
                .with_description("When specified, sends undeliverable messages to the specified Amazon SQS dead-letter queue."),
        )
        .property(
            PropertySchema::new("SubscriptionRoleArn", PropertyType::String)
                .with_description("This property applies only to Amazon Data Firehose delivery stream subscriptions."),
        )
        .property(
            PropertySchema::new("Region", PropertyType::String)
                .update_requires(UpdateBehavior::Conditional)
                .with_description("For cross-region subscriptions, the region in which the topic resides. If no region is specified, AWS CloudFormation uses the region of the caller."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("Arn of the subscription."),
        )
}
