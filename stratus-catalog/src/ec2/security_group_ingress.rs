//! security_group_ingress schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::SecurityGroupIngress
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::SecurityGroupIngress
pub fn security_group_ingress() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::SecurityGroupIngress")
        .with_description("Adds an inbound rule to a security group. An inbound rule permits instances to receive traffic from the specified IPv4 or IPv6 CIDR address range, or...")
        .property(
            PropertySchema::new("IpProtocol", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IP protocol name (``tcp``, ``udp``, ``icmp``, ``icmpv6``) or number. Use ``-1`` to specify all protocols."),
        )
        .property(
            PropertySchema::new("GroupId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the security group. You must specify either the security group ID or the security group name in the request."),
        )
        .property(
            PropertySchema::new("GroupName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("[Default VPC] The name of the security group. For security groups for a default VPC you can specify either the ID or the name of the security group."),
        )
        .property(
            PropertySchema::new("FromPort", PropertyType::Integer)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number. A value of ``-1`` indicates all ICMP/ICMPv6 types."),
        )
        .property(
            PropertySchema::new("ToPort", PropertyType::Integer)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code. A value of ``-1`` indicates all ICMP/ICMPv6 codes."),
        )
        .property(
            PropertySchema::new("CidrIp", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IPv4 address range, in CIDR format."),
        )
        .property(
            PropertySchema::new("CidrIpv6", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The IPv6 address range, in CIDR format."),
        )
        .property(
            PropertySchema::new("SourcePrefixListId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of a prefix list."),
        )
        .property(
            PropertySchema::new("SourceSecurityGroupId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of the security group. You must specify either the security group ID or the security group name."),
        )
        .property(
            PropertySchema::new("SourceSecurityGroupName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("[Default VPC] The name of the source security group. The rule grants full ICMP, UDP, and TCP access."),
        )
        .property(
            PropertySchema::new("SourceSecurityGroupOwnerId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("[nondefault VPC] The AWS account ID for the source security group, if the source security group is in a different account."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .length(0, 255)
                .with_description("Updates the description of an ingress (inbound) security group rule. You can replace an existing description, or add a description to a rule that did..."),
        )
        .property(
            PropertySchema::new("Id", PropertyType::String)
                .read_only()
                .with_description("The Security Group Rule Id."),
        )
}
