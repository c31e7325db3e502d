//! Stratus Core
//!
//! Schema primitives for the CloudFormation resource type catalog

pub mod attributes;
pub mod intrinsic;
pub mod schema;
pub mod template;
