//! DynamoDB resource schemas
//!
//! Generated from the AWS::DynamoDB resource provider schemas.

pub mod table;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all DynamoDB schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![table::table()]
}
