//! vpc schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::VPC
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::{string_list, tag_list};
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::VPC
pub fn vpc() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::VPC")
        .with_description("Specifies a virtual private cloud (VPC). To add an IPv6 CIDR block to the VPC, see AWS::EC2::VPCCidrBlock.")
        .property(
            PropertySchema::new("CidrBlock", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IPv4 network range for the VPC, in CIDR notation. For example, ``10.0.0.0/16``. We modify the specified CIDR block to its canonical form; for exam..."),
        )
        .property(
            PropertySchema::new("EnableDnsHostnames", PropertyType::Boolean)
                .with_description("Indicates whether the instances launched in the VPC get DNS hostnames. If enabled, instances in the VPC get DNS hostnames; otherwise, they do not. Dis..."),
        )
        .property(
            PropertySchema::new("EnableDnsSupport", PropertyType::Boolean)
                .with_description("Indicates whether the DNS resolution is supported for the VPC. If enabled, queries to the Amazon provided DNS server at the 169.254.169.253 IP address..."),
        )
        .property(
            PropertySchema::new("InstanceTenancy", PropertyType::Enum(vec![
                "default".to_string(),
                "dedicated".to_string(),
                "host".to_string(),
            ]))
                .update_requires(UpdateBehavior::Conditional)
                .with_description("The allowed tenancy of instances launched into the VPC. ``default``: An instance launched into the VPC runs on shared hardware by default, unless you..."),
        )
        .property(
            PropertySchema::new("Ipv4IpamPoolId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of an IPv4 IPAM pool you want to use for allocating this VPC's CIDR."),
        )
        .property(
            PropertySchema::new("Ipv4NetmaskLength", PropertyType::Integer)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The netmask length of the IPv4 CIDR you want to allocate to this VPC from an Amazon VPC IP Address Manager (IPAM) pool."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("The tags for the VPC."),
        )
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .read_only()
                .with_description("The ID of the VPC."),
        )
        .property(
            PropertySchema::new("CidrBlockAssociations", string_list())
                .read_only()
                .with_description("The association IDs of the IPv4 CIDR blocks for the VPC."),
        )
        .property(
            PropertySchema::new("DefaultNetworkAcl", PropertyType::String)
                .read_only()
                .with_description("The ID of the default network ACL for the VPC."),
        )
        .property(
            PropertySchema::new("DefaultSecurityGroup", PropertyType::String)
                .read_only()
                .with_description("The ID of the default security group for the VPC."),
        )
        .property(
            PropertySchema::new("Ipv6CidrBlocks", string_list())
                .read_only()
                .with_description("The IPv6 CIDR blocks for the VPC."),
        )
}
