//! queue_policy schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::SQS::QueuePolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::string_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema};

/// Returns the schema for AWS::SQS::QueuePolicy
pub fn queue_policy() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::SQS::QueuePolicy")
        .with_description("The ``AWS::SQS::QueuePolicy`` type applies a policy to SQS queues. For an example snippet, see Declaring an SQS policy in the AWS CloudFormation User...")
        .property(
            PropertySchema::new("PolicyDocument", PropertyType::Json)
                .required()
                .with_description("A policy document that contains the permissions for the specified SQS queues. For more information about SQS policies, see Using custom policies with..."),
        )
        .property(
            PropertySchema::new("Queues", string_list())
                .required()
                .with_description("The URLs of the queues to which you want to add the policy. You can use the ``Ref`` function to specify an ``AWS::SQS::Queue`` resource."),
        )
        .property(
            PropertySchema::new("Id", PropertyType::String)
                .read_only()
                .with_description("The provider-assigned unique ID for this resource."),
        )
}
