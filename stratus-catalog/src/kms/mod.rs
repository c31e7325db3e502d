//! KMS resource schemas
//!
//! Generated from the AWS::KMS resource provider schemas.

pub mod key;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all KMS schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![key::key()]
}
