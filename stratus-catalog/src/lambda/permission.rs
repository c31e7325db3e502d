//! permission schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::Lambda::Permission
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::Lambda::Permission
pub fn permission() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::Lambda::Permission")
        .with_description("The ``AWS::Lambda::Permission`` resource grants an AWS service or another account permission to use a function. You can apply the policy at the functi...")
        .property(
            PropertySchema::new("Action", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .pattern(r"^(lambda:[*]|lambda:[a-zA-Z]+|[*])$")
                .with_description("The action that the principal can use on the function. For example, ``lambda:InvokeFunction`` or ``lambda:GetFunction``."),
        )
        .property(
            PropertySchema::new("FunctionName", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 140)
                .with_description("The name or ARN of the Lambda function, version, or alias."),
        )
        .property(
            PropertySchema::new("Principal", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 1024)
                .with_description("The AWS-service, AWS-account, IAM user, or IAM role that invokes the function. If you specify a service, use ``SourceArn`` or ``SourceAccount`` to lim..."),
        )
        .property(
            PropertySchema::new("SourceAccount", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .pattern(r"^\d{12}$")
                .with_description("For AWS-service, the ID of the AWS-account that owns the resource. Use this together with ``SourceArn`` to ensure that the specified account owns the..."),
        )
        .property(
            PropertySchema::new("SourceArn", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .pattern(r"^arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*$")
                .with_description("For AWS-services, the ARN of the AWS resource that invokes the function. For example, an Amazon S3 bucket or Amazon SNS topic."),
        )
        .property(
            PropertySchema::new("EventSourceToken", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 256)
                .pattern(r"^[a-zA-Z0-9._\-]+$")
                .with_description("For Alexa Smart Home functions, a token that the invoker must supply."),
        )
        .property(
            PropertySchema::new("FunctionUrlAuthType", PropertyType::Enum(vec![
                "AWS_IAM".to_string(),
                "NONE".to_string(),
            ]))
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The type of authentication that your function URL uses. Set to ``AWS_IAM`` if you want to restrict access to authenticated users only."),
        )
        .property(
            PropertySchema::new("PrincipalOrgID", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(12, 34)
                .pattern(r"^o-[a-z0-9]{10,32}$")
                .with_description("The identifier for your organization in AOS. Use this to grant permissions to all the AWS-accounts under this organization."),
        )
        .property(
            PropertySchema::new("Id", PropertyType::String)
                .read_only()
                .with_description("A statement identifier that differentiates the statement from others in the same policy."),
        )
}
