//! eip schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::EC2::EIP
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::EC2::EIP
pub fn eip() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::EIP")
        .with_description("Specifies an Elastic IP (EIP) address and can, optionally, associate it with an Amazon EC2 instance. You can allocate an Elastic IP address from an ad...")
        .property(
            PropertySchema::new("Domain", PropertyType::String)
                .update_requires(UpdateBehavior::Conditional)
                .with_description("The network (``vpc``). If you define an Elastic IP address and associate it with a VPC that is defined in the same template, you must declare a depend..."),
        )
        .property(
            PropertySchema::new("InstanceId", PropertyType::String)
                .update_requires(UpdateBehavior::Conditional)
                .with_description("The ID of the instance. Updates to the ``InstanceId`` property may require some interruptions. Updates on an EIP reassociate the address on its associ..."),
        )
        .property(
            PropertySchema::new("NetworkBorderGroup", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("A unique set of Availability Zones, Local Zones, or Wavelength Zones from which AWS advertises IP addresses. Use this parameter to limit the IP addres..."),
        )
        .property(
            PropertySchema::new("PublicIpv4Pool", PropertyType::String)
                .update_requires(UpdateBehavior::Conditional)
                .with_description("The ID of an address pool that you own. Use this parameter to let Amazon EC2 select an address from the address pool."),
        )
        .property(
            PropertySchema::new("TransferAddress", PropertyType::String)
                .update_requires(UpdateBehavior::Conditional)
                .with_description("The Elastic IP address you are accepting for transfer. You can only accept one transferred address."),
        )
        .property(
            PropertySchema::new("IpamPoolId", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The ID of an IPAM pool which has an Amazon-provided or BYOIP public IPv4 CIDR provisioned to it."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("Any tags assigned to the Elastic IP address. Updates to the ``Tags`` property may require some interruptions."),
        )
        .property(
            PropertySchema::new("AllocationId", PropertyType::String)
                .read_only()
                .with_description("The allocation ID of the Elastic IP address."),
        )
        .property(
            PropertySchema::new("PublicIp", PropertyType::String)
                .read_only()
                .with_description("The Elastic IP address."),
        )
}
