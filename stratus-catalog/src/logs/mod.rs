//! CloudWatch Logs resource schemas
//!
//! Generated from the AWS::Logs resource provider schemas.

pub mod log_group;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all Logs schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![log_group::log_group()]
}
