//! IAM resource schemas
//!
//! Generated from the AWS::IAM resource provider schemas.

pub mod instance_profile;
pub mod managed_policy;
pub mod role;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all IAM schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![
        role::role(),
        managed_policy::managed_policy(),
        instance_profile::instance_profile(),
    ]
}
