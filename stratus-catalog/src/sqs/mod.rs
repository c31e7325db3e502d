//! SQS resource schemas
//!
//! Generated from the AWS::SQS resource provider schemas.

pub mod queue;
pub mod queue_policy;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all SQS schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![queue::queue(), queue_policy::queue_policy()]
}
