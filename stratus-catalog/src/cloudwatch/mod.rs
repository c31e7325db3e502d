//! CloudWatch resource schemas
//!
//! Generated from the AWS::CloudWatch resource provider schemas.

pub mod alarm;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all CloudWatch schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![alarm::alarm()]
}
