//! security_group schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::SecurityGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn ingress_rule() -> ShapeSchema {
    ShapeSchema::new("Ingress")
        .field(
            PropertySchema::new("IpProtocol", PropertyType::String)
                .required()
                .with_description("The IP protocol name (``tcp``, ``udp``, ``icmp``, ``icmpv6``) or number. Use ``-1`` to specify all protocols."),
        )
        .field(PropertySchema::new("FromPort", PropertyType::Integer))
        .field(PropertySchema::new("ToPort", PropertyType::Integer))
        .field(PropertySchema::new("CidrIp", PropertyType::String))
        .field(PropertySchema::new("CidrIpv6", PropertyType::String))
        .field(PropertySchema::new("SourcePrefixListId", PropertyType::String))
        .field(PropertySchema::new("SourceSecurityGroupId", PropertyType::String))
        .field(PropertySchema::new("SourceSecurityGroupName", PropertyType::String))
        .field(PropertySchema::new("SourceSecurityGroupOwnerId", PropertyType::String))
        .field(PropertySchema::new("Description", PropertyType::String).length(0, 255))
}

fn egress_rule() -> ShapeSchema {
    ShapeSchema::new("Egress")
        .field(
            PropertySchema::new("IpProtocol", PropertyType::String)
                .required()
                .with_description("The IP protocol name (``tcp``, ``udp``, ``icmp``, ``icmpv6``) or number. Use ``-1`` to specify all protocols."),
        )
        .field(PropertySchema::new("FromPort", PropertyType::Integer))
        .field(PropertySchema::new("ToPort", PropertyType::Integer))
        .field(PropertySchema::new("CidrIp", PropertyType::String))
        .field(PropertySchema::new("CidrIpv6", PropertyType::String))
        .field(PropertySchema::new("DestinationPrefixListId", PropertyType::String))
        .field(PropertySchema::new("DestinationSecurityGroupId", PropertyType::String))
        .field(PropertySchema::new("Description", PropertyType::String).length(0, 255))
}

/// Returns the schema for AWS::EC2::SecurityGroup
pub fn security_group() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::SecurityGroup")
        .with_description("Resource Type definition for AWS::EC2::SecurityGroup")
        .property(
            PropertySchema::new("GroupDescription", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .length(0, 255)
                .with_description("A description for the security group. Constraints: Up to 255 characters in length."),
        )
        .property(
            PropertySchema::new("GroupName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The name of the security group. Names are case-insensitive and must be unique within the VPC."),
        )
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the VPC for the security group. If you do not specify a VPC, the default is to use the default VPC for the Region."),
        )
        .property(
            PropertySchema::new("SecurityGroupIngress", PropertyType::List(Box::new(PropertyType::Shape(ingress_rule()))))
                .with_description("The inbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group."),
        )
        .property(
            PropertySchema::new("SecurityGroupEgress", PropertyType::List(Box::new(PropertyType::Shape(egress_rule()))))
                .with_description("[VPC only] The outbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("Any tags assigned to the security group."),
        )
        .property(
            PropertySchema::new("GroupId", PropertyType::String)
                .read_only()
                .with_description("The group ID of the specified security group."),
        )
        .property(
            PropertySchema::new("Id", PropertyType::String)
                .read_only()
                .with_description("The group name or group ID depending on whether the SG is created in a default or specific VPC."),
        )
}
