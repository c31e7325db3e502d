//! managed_policy schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::IAM::ManagedPolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::string_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::IAM::ManagedPolicy
pub fn managed_policy() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::IAM::ManagedPolicy")
        .with_description("Creates a new managed policy for your AWS-account. This operation creates a policy version with a version identifier of ``v1`` and sets v1 as the poli...")
        .property(
            PropertySchema::new("PolicyDocument", PropertyType::Json)
                .required()
                .with_description("The JSON policy document that you want to use as the content for the new policy. You must provide policies in JSON format in IAM."),
        )
        .property(
            PropertySchema::new("ManagedPolicyName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 128)
                .with_description("The friendly name of the policy. If you specify a name, you cannot perform updates that require replacement of this resource."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(0, 1000)
                .with_description("A friendly description of the policy. Typically used to store information about the permissions defined in the policy."),
        )
        .property(
            PropertySchema::new("Path", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The path for the policy. This parameter is optional. If it is not included, it defaults to a slash (/)."),
        )
        .property(
            PropertySchema::new("Groups", string_list())
                .with_description("The name (friendly name, not ARN) of the group to attach the policy to."),
        )
        .property(
            PropertySchema::new("Roles", string_list())
                .with_description("The name (friendly name, not ARN) of the role to attach the policy to."),
        )
        .property(
            PropertySchema::new("Users", string_list())
                .with_description("The name (friendly name, not ARN) of the IAM user to attach the policy to."),
        )
        .property(
            PropertySchema::new("PolicyArn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) of the managed policy."),
        )
        .property(
            PropertySchema::new("PolicyId", PropertyType::String)
                .read_only()
                .with_description("The stable and unique string identifying the policy."),
        )
}
