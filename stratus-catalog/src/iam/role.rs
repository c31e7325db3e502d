//! role schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::IAM::Role
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::{string_list, tag_list};
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn policy() -> ShapeSchema {
    ShapeSchema::new("Policy")
        .field(
            PropertySchema::new("PolicyName", PropertyType::String)
                .required()
                .length(1, 128)
                .with_description("The friendly name (not ARN) identifying the policy."),
        )
        .field(
            PropertySchema::new("PolicyDocument", PropertyType::Json)
                .required()
                .with_description("The entire contents of the policy that defines permissions. For more information, see Overview of JSON policies."),
        )
}

/// Returns the schema for AWS::IAM::Role
pub fn role() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::IAM::Role")
        .with_description("Creates a new role for your AWS-account. For more information about roles, see IAM roles in the IAM User Guide.")
        .property(
            PropertySchema::new("AssumeRolePolicyDocument", PropertyType::Json)
                .required()
                .with_description("The trust policy that is associated with this role. Trust policies define which entities can assume the role. You can associate only one trust policy..."),
        )
        .property(
            PropertySchema::new("RoleName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 64)
                .pattern(r"^[\w+=,.@-]+$")
                .with_description("A name for the IAM role, up to 64 characters in length. The role name must be unique within the account. Role names are not distinguished by case."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .length(0, 1000)
                .with_description("A description of the role that you provide."),
        )
        .property(
            PropertySchema::new("ManagedPolicyArns", string_list())
                .with_description("A list of Amazon Resource Names (ARNs) of the IAM managed policies that you want to attach to the role."),
        )
        .property(
            PropertySchema::new("MaxSessionDuration", PropertyType::Integer)
                .range(3600.0, 43200.0)
                .with_description("The maximum session duration (in seconds) that you want to set for the specified role. If you do not specify a value for this setting, the default is..."),
        )
        .property(
            PropertySchema::new("Path", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .pattern(r"^/(.+/)*$|^/$")
                .with_description("The path to the role. For more information about paths, see IAM identifiers in the IAM User Guide. This parameter is optional. If it is not included..."),
        )
        .property(
            PropertySchema::new("PermissionsBoundary", PropertyType::String)
                .with_description("The ARN of the policy used to set the permissions boundary for the role."),
        )
        .property(
            PropertySchema::new("Policies", PropertyType::List(Box::new(PropertyType::Shape(policy()))))
                .with_description("Adds or updates an inline policy document that is embedded in the specified IAM role."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("A list of tags that are attached to the role."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) for the role."),
        )
        .property(
            PropertySchema::new("RoleId", PropertyType::String)
                .read_only()
                .with_description("The stable and unique string identifying the role."),
        )
}
