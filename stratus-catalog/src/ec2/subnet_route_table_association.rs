//! subnet_route_table_association schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::SubnetRouteTableAssociation
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::SubnetRouteTableAssociation
pub fn subnet_route_table_association() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::SubnetRouteTableAssociation")
        .with_description("Associates a subnet with a route table. The subnet and route table must be in the same VPC. This association causes traffic originating from the subne...")
        .property(
            PropertySchema::new("RouteTableId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the route table. The physical ID changes when the route table ID is changed."),
        )
        .property(
            PropertySchema::new("SubnetId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the subnet."),
        )
        .property(
            PropertySchema::new("Id", PropertyType::String)
                .read_only()
                .with_description("The ID of the subnet route table association."),
        )
}
