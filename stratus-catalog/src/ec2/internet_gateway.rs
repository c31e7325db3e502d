//! internet_gateway schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::InternetGateway
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema};

/// Returns the schema for AWS::EC2::InternetGateway
pub fn internet_gateway() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::InternetGateway")
        .with_description("Allocates an internet gateway for use with a VPC. To attach the internet gateway to a VPC, use the AWS::EC2::VPCGatewayAttachment resource.")
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("Any tags to assign to the internet gateway."),
        )
        .property(
            PropertySchema::new("InternetGatewayId", PropertyType::String)
                .read_only()
                .with_description("The ID of the internet gateway."),
        )
}
