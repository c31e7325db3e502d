//! route schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::Route
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::Route
pub fn route() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::Route")
        .with_description("Specifies a route in a route table. For more information, see Routes in the Amazon VPC User Guide. You must specify either a destination CIDR block or...")
        .property(
            PropertySchema::new("RouteTableId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the route table. The routing table must be associated with the same VPC that the virtual private gateway is attached to."),
        )
        .property(
            PropertySchema::new("DestinationCidrBlock", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IPv4 CIDR address block used for the destination match. Routing decisions are based on the most specific match."),
        )
        .property(
            PropertySchema::new("DestinationIpv6CidrBlock", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IPv6 CIDR block used for the destination match. Routing decisions are based on the most specific match."),
        )
        .property(
            PropertySchema::new("GatewayId", PropertyType::String)
                .with_description("The ID of an internet gateway or virtual private gateway attached to your VPC."),
        )
        .property(
            PropertySchema::new("NatGatewayId", PropertyType::String)
                .with_description("[IPv4 traffic only] The ID of a NAT gateway."),
        )
        .property(
            PropertySchema::new("InstanceId", PropertyType::String)
                .with_description("The ID of a NAT instance in your VPC. The operation fails if you specify an instance ID unless exactly one network interface is attached."),
        )
        .property(
            PropertySchema::new("TransitGatewayId", PropertyType::String)
                .with_description("The ID of a transit gateway."),
        )
        .property(
            PropertySchema::new("VpcEndpointId", PropertyType::String)
                .with_description("The ID of a VPC endpoint. Supported for Gateway Load Balancer endpoints only."),
        )
        .property(
            PropertySchema::new("VpcPeeringConnectionId", PropertyType::String)
                .with_description("The ID of a VPC peering connection."),
        )
        .property(
            PropertySchema::new("EgressOnlyInternetGatewayId", PropertyType::String)
                .with_description("[IPv6 traffic only] The ID of an egress-only internet gateway."),
        )
        .property(
            PropertySchema::new("CidrBlock", PropertyType::String)
                .read_only()
                .with_description("The primary identifier of the route."),
        )
}
