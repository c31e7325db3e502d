//! bucket_policy schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::S3::BucketPolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::S3::BucketPolicy
pub fn bucket_policy() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::S3::BucketPolicy")
        .with_description("Applies an Amazon S3 bucket policy to an Amazon S3 bucket. If you are using an identity other than the root user of the AWS-account that owns the buck...")
        .property(
            PropertySchema::new("Bucket", PropertyType::String)
                .required()
                .update_requires(UpdateBehavior::Replacement)
                .with_description("The name of the Amazon S3 bucket to which the policy applies."),
        )
        .property(
            PropertySchema::new("PolicyDocument", PropertyType::Json)
                .required()
                .with_description("A policy document containing permissions to add to the specified bucket. In IAM, you must provide policy documents in JSON format."),
        )
}
