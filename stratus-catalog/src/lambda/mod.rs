//! Lambda resource schemas
//!
//! Generated from the AWS::Lambda resource provider schemas.

pub mod function;
pub mod permission;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all Lambda schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![function::function(), permission::permission()]
}
