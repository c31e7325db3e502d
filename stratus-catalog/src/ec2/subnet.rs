//! subnet schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::Subnet
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn private_dns_name_options_on_launch() -> ShapeSchema {
    ShapeSchema::new("PrivateDnsNameOptionsOnLaunch")
        .field(PropertySchema::new(
            "HostnameType",
            PropertyType::Enum(vec!["ip-name".to_string(), "resource-name".to_string()]),
        ))
        .field(PropertySchema::new(
            "EnableResourceNameDnsRecord",
            PropertyType::Boolean,
        ))
        .field(PropertySchema::new(
            "EnableResourceNameDnsAAAARecord",
            PropertyType::Boolean,
        ))
}

/// Returns the schema for AWS::EC2::Subnet
pub fn subnet() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::Subnet")
        .with_description("Specifies a subnet for the specified VPC. For an IPv4-only subnet, specify an IPv4 CIDR block. For a dual-stack subnet, specify both an IPv4 CIDR bloc...")
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the VPC the subnet is in. If you update this property, you must also update the ``CidrBlock`` property."),
        )
        .property(
            PropertySchema::new("CidrBlock", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IPv4 CIDR block assigned to the subnet. If you update this property, we create a new subnet, and then delete the existing one."),
        )
        .property(
            PropertySchema::new("AvailabilityZone", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The Availability Zone of the subnet. If you update this property, you must also update the ``CidrBlock`` property."),
        )
        .property(
            PropertySchema::new("AvailabilityZoneId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The AZ ID of the subnet."),
        )
        .property(
            PropertySchema::new("MapPublicIpOnLaunch", PropertyType::Boolean)
                .with_description("Indicates whether instances launched in this subnet receive a public IPv4 address. The default value is ``false``."),
        )
        .property(
            PropertySchema::new("AssignIpv6AddressOnCreation", PropertyType::Boolean)
                .with_description("Indicates whether a network interface created in this subnet receives an IPv6 address. The default value is ``false``."),
        )
        .property(
            PropertySchema::new("Ipv6CidrBlock", PropertyType::String)
                .update_requires(UpdateBehavior::Conditional)
                .with_description("The IPv6 CIDR block. If you specify ``AssignIpv6AddressOnCreation``, you must also specify an IPv6 CIDR block."),
        )
        .property(
            PropertySchema::new("EnableDns64", PropertyType::Boolean)
                .with_description("Indicates whether DNS queries made to the Amazon-provided DNS Resolver in this subnet should return synthetic IPv6 addresses for IPv4-only destination..."),
        )
        .property(
            PropertySchema::new("PrivateDnsNameOptionsOnLaunch", PropertyType::Shape(private_dns_name_options_on_launch()))
                .with_description("The hostname type for EC2 instances launched into this subnet and how DNS A and AAAA record queries to the instances should be handled."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("Any tags assigned to the subnet."),
        )
        .property(
            PropertySchema::new("SubnetId", PropertyType::String)
                .read_only()
                .with_description("The ID of the subnet."),
        )
        .property(
            PropertySchema::new("NetworkAclAssociationId", PropertyType::String)
                .read_only()
                .with_description("The ID of the network ACL association."),
        )
}
