//! route_table schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::RouteTable
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::RouteTable
pub fn route_table() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::RouteTable")
        .with_description("Specifies a route table for the specified VPC. After you create a route table, you can add routes and associate the table with a subnet.")
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the VPC."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("Any tags assigned to the route table."),
        )
        .property(
            PropertySchema::new("RouteTableId", PropertyType::String)
                .read_only()
                .with_description("The ID of the route table."),
        )
}
