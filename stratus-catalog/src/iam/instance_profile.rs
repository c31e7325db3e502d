//! instance_profile schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::IAM::InstanceProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::string_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::IAM::InstanceProfile
pub fn instance_profile() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::IAM::InstanceProfile")
        .with_description("Creates a new instance profile. For information about instance profiles, see Using roles for applications on Amazon EC2 in the IAM User Guide.")
        .property(
            PropertySchema::new("Roles", string_list())
                .required()
                .with_description("The name of the role to associate with the instance profile. Only one role can be assigned to an EC2 instance at a time."),
        )
        .property(
            PropertySchema::new("InstanceProfileName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 128)
                .pattern(r"^[\w+=,.@-]+$")
                .with_description("The name of the instance profile to create. This parameter allows a string of characters consisting of upper and lowercase alphanumeric characters wit..."),
        )
        .property(
            PropertySchema::new("Path", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The path to the instance profile. This parameter is optional. If it is not included, it defaults to a slash (/)."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) of the instance profile."),
        )
}
