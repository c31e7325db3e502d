//! queue schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::SQS::Queue
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::SQS::Queue
pub fn queue() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::SQS::Queue")
        .with_description("The ``AWS::SQS::Queue`` resource creates an Amazon SQS standard or FIFO queue. Keep the following caveats in mind: if you don't specify the ``FifoQueu...")
        .property(
            PropertySchema::new("QueueName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("A name for the queue. To create a FIFO queue, the name of your FIFO queue must end with the ``.fifo`` suffix. If you don't specify a name, CFN generat..."),
        )
        .property(
            PropertySchema::new("FifoQueue", PropertyType::Boolean)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("If set to true, creates a FIFO queue. If you don't specify this property, CFN creates a standard queue."),
        )
        .property(
            PropertySchema::new("ContentBasedDeduplication", PropertyType::Boolean)
                .with_description("For first-in-first-out (FIFO) queues, specifies whether to enable content-based deduplication. During the deduplication interval, SQS treats messages..."),
        )
        .property(
            PropertySchema::new("DeduplicationScope", PropertyType::Enum(vec![
                "messageGroup".to_string(),
                "queue".to_string(),
            ]))
                .with_description("For high throughput for FIFO queues, specifies whether message deduplication occurs at the message group or queue level."),
        )
        .property(
            PropertySchema::new("FifoThroughputLimit", PropertyType::Enum(vec![
                "perQueue".to_string(),
                "perMessageGroupId".to_string(),
            ]))
                .with_description("For high throughput for FIFO queues, specifies whether the FIFO queue throughput quota applies to the entire queue or per message group."),
        )
        .property(
            PropertySchema::new("DelaySeconds", PropertyType::Integer)
                .range(0.0, 900.0)
                .with_description("The time in seconds for which the delivery of all messages in the queue is delayed. You can specify an integer value of 0 to 900 (15 minutes)."),
        )
        .property(
            PropertySchema::new("MaximumMessageSize", PropertyType::Integer)
                .range(1024.0, 262144.0)
                .with_description("The limit of how many bytes that a message can contain before SQS rejects it. You can specify an integer value from 1,024 bytes (1 KiB) to 262,144 by..."),
        )
        .property(
            PropertySchema::new("MessageRetentionPeriod", PropertyType::Integer)
                .range(60.0, 1209600.0)
                .with_description("The number of seconds that SQS retains a message. You can specify an integer value from 60 seconds (1 minute) to 1,209,600 seconds (14 days)."),
        )
        .property(
            PropertySchema::new("ReceiveMessageWaitTimeSeconds", PropertyType::Integer)
                .range(0.0, 20.0)
                .with_description("Specifies the duration, in seconds, that the ReceiveMessage action call waits until a message is in the queue in order to include it in the response."),
        )
        .property(
            PropertySchema::new("VisibilityTimeout", PropertyType::Integer)
                .range(0.0, 43200.0)
                .with_description("The length of time during which a message will be unavailable after a message is delivered from the queue. This blocks other components from receivin..."),
        )
        .property(
            PropertySchema::new("KmsMasterKeyId", PropertyType::String)
                .with_description("The ID of an AWS Key Management Service (KMS) for SQS, or a custom KMS. To use the AWS managed KMS for SQS, specify a (default) alias ARN, alias name..."),
        )
        .property(
            PropertySchema::new("KmsDataKeyReusePeriodSeconds", PropertyType::Integer)
                .range(60.0, 86400.0)
                .with_description("The length of time in seconds for which SQS can reuse a data key to encrypt or decrypt messages before calling KMS again. The value must be an intege..."),
        )
        .property(
            PropertySchema::new("SqsManagedSseEnabled", PropertyType::Boolean)
                .with_description("Enables server-side queue encryption using SQS owned encryption keys. Only one server-side encryption option is supported per queue."),
        )
        .property(
            PropertySchema::new("RedrivePolicy", PropertyType::Json)
                .with_description("The string that includes the parameters for the dead-letter queue functionality of the source queue as a JSON object."),
        )
        .property(
            PropertySchema::new("RedriveAllowPolicy", PropertyType::Json)
                .with_description("The string that includes the parameters for the permissions for the dead-letter queue redrive permission and which source queues can specify dead-let..."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("The tags that you attach to this queue."),
        )
        .property(
            PropertySchema::new("QueueUrl", PropertyType::String)
                .read_only()
                .with_description("Returns the URLs of the queues from the policy."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("Returns the Amazon Resource Name (ARN) of the queue."),
        )
}
