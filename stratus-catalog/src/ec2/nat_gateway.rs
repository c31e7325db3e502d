//! nat_gateway schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::NatGateway
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::{string_list, tag_list};
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::NatGateway
pub fn nat_gateway() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::NatGateway")
        .with_description("Specifies a network address translation (NAT) gateway in the specified subnet. You can create either a public NAT gateway or a private NAT gateway.")
        .property(
            PropertySchema::new("SubnetId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the subnet in which the NAT gateway is located."),
        )
        .property(
            PropertySchema::new("AllocationId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("[Public NAT gateway only] The allocation ID of the Elastic IP address that's associated with the NAT gateway. This property is required for a public N..."),
        )
        .property(
            PropertySchema::new("ConnectivityType", PropertyType::Enum(vec![
                "public".to_string(),
                "private".to_string(),
            ]))
                .update_requires(UpdateBehavior::Replacement)
                .with_description("Indicates whether the NAT gateway supports public or private connectivity. The default is public connectivity."),
        )
        .property(
            PropertySchema::new("PrivateIpAddress", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The private IPv4 address to assign to the NAT gateway. If you don't provide an address, a private IPv4 address will be automatically assigned."),
        )
        .property(
            PropertySchema::new("MaxDrainDurationSeconds", PropertyType::Integer)
                .range(1.0, 4000.0)
                .with_description("The maximum amount of time to wait (in seconds) before forcibly releasing the IP addresses if connections are still in progress."),
        )
        .property(
            PropertySchema::new("SecondaryAllocationIds", string_list())
                .with_description("Secondary EIP allocation IDs."),
        )
        .property(
            PropertySchema::new("SecondaryPrivateIpAddressCount", PropertyType::Integer)
                .range(1.0, 31.0)
                .with_description("[Private NAT gateway only] The number of secondary private IPv4 addresses you want to assign to the NAT gateway."),
        )
        .property(
            PropertySchema::new("SecondaryPrivateIpAddresses", string_list())
                .with_description("Secondary private IPv4 addresses."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("The tags for the NAT gateway."),
        )
        .property(
            PropertySchema::new("NatGatewayId", PropertyType::String)
                .read_only()
                .with_description("The ID of the NAT gateway."),
        )
}
