//! SNS resource schemas
//!
//! Generated from the AWS::SNS resource provider schemas.

pub mod subscription;
pub mod topic;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all SNS schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![topic::topic(), subscription::subscription()]
}
