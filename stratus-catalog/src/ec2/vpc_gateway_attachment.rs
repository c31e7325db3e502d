//! vpc_gateway_attachment schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::VPCGatewayAttachment
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::VPCGatewayAttachment
pub fn vpc_gateway_attachment() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::VPCGatewayAttachment")
        .with_description("Attaches an internet gateway, or a virtual private gateway, to a VPC. You must specify exactly one of either InternetGatewayId or VpnGatewayId.")
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the VPC."),
        )
        .property(
            PropertySchema::new("InternetGatewayId", PropertyType::String)
                .with_description("The ID of the internet gateway. You must specify either ``InternetGatewayId`` or ``VpnGatewayId``, but not both."),
        )
        .property(
            PropertySchema::new("VpnGatewayId", PropertyType::String)
                .with_description("The ID of the virtual private gateway. You must specify either ``InternetGatewayId`` or ``VpnGatewayId``, but not both."),
        )
        .property(
            PropertySchema::new("AttachmentType", PropertyType::String)
                .read_only()
                .with_description("Used to identify if this resource is an Internet Gateway or Vpn Gateway Attachment."),
        )
}
