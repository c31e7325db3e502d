//! S3 resource schemas
//!
//! Generated from the AWS::S3 resource provider schemas.

pub mod bucket;
pub mod bucket_policy;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all S3 schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![bucket::bucket(), bucket_policy::bucket_policy()]
}
