//! bucket schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::S3::Bucket
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn versioning_configuration() -> ShapeSchema {
    ShapeSchema::new("VersioningConfiguration").field(
        PropertySchema::new(
            "Status",
            PropertyType::Enum(vec!["Enabled".to_string(), "Suspended".to_string()]),
        )
        .required()
        .with_description("The versioning state of the bucket."),
    )
}

fn server_side_encryption_by_default() -> ShapeSchema {
    ShapeSchema::new("ServerSideEncryptionByDefault")
        .field(
            PropertySchema::new(
                "SSEAlgorithm",
                PropertyType::Enum(vec![
                    "aws:kms".to_string(),
                    "AES256".to_string(),
                    "aws:kms:dsse".to_string(),
                ]),
            )
            .required()
            .with_description("Server-side encryption algorithm to use for the default encryption."),
        )
        .field(
            PropertySchema::new("KMSMasterKeyID", PropertyType::String).with_description(
                "AWS Key Management Service (KMS) customer managed key ID to use for the default \
                 encryption. You can specify the key ID, key ARN, or alias.",
            ),
        )
}

fn server_side_encryption_rule() -> ShapeSchema {
    ShapeSchema::new("ServerSideEncryptionRule")
        .field(PropertySchema::new(
            "ServerSideEncryptionByDefault",
            PropertyType::Shape(server_side_encryption_by_default()),
        ))
        .field(
            PropertySchema::new("BucketKeyEnabled", PropertyType::Boolean).with_description(
                "Specifies whether Amazon S3 should use an S3 Bucket Key with server-side \
                 encryption using KMS (SSE-KMS) for new objects in the bucket.",
            ),
        )
}

fn bucket_encryption() -> ShapeSchema {
    ShapeSchema::new("BucketEncryption").field(
        PropertySchema::new(
            "ServerSideEncryptionConfiguration",
            PropertyType::List(Box::new(PropertyType::Shape(server_side_encryption_rule()))),
        )
        .required()
        .with_description("Specifies the default server-side-encryption configuration."),
    )
}

fn public_access_block_configuration() -> ShapeSchema {
    ShapeSchema::new("PublicAccessBlockConfiguration")
        .field(PropertySchema::new("BlockPublicAcls", PropertyType::Boolean))
        .field(PropertySchema::new("BlockPublicPolicy", PropertyType::Boolean))
        .field(PropertySchema::new("IgnorePublicAcls", PropertyType::Boolean))
        .field(PropertySchema::new(
            "RestrictPublicBuckets",
            PropertyType::Boolean,
        ))
}

fn website_configuration() -> ShapeSchema {
    ShapeSchema::new("WebsiteConfiguration")
        .field(
            PropertySchema::new("IndexDocument", PropertyType::String)
                .with_description("The name of the index document for the website."),
        )
        .field(
            PropertySchema::new("ErrorDocument", PropertyType::String)
                .with_description("The name of the error document for the website."),
        )
}

/// Returns the schema for AWS::S3::Bucket
pub fn bucket() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::S3::Bucket")
        .with_description("The ``AWS::S3::Bucket`` resource creates an Amazon S3 bucket in the same AWS Region where you create the AWS CloudFormation stack.")
        .property(
            PropertySchema::new("BucketName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(3, 63)
                .pattern(r"^[a-z0-9][a-z0-9.-]*[a-z0-9]$")
                .with_description("A name for the bucket. The bucket name must contain only lowercase letters, numbers, periods (.), and dashes (-) and must follow Amazon S3 bucket rest..."),
        )
        .property(
            PropertySchema::new("VersioningConfiguration", PropertyType::Shape(versioning_configuration()))
                .with_description("Enables multiple versions of all objects in this bucket. You might enable versioning to prevent objects from being deleted or overwritten by mistake..."),
        )
        .property(
            PropertySchema::new("BucketEncryption", PropertyType::Shape(bucket_encryption()))
                .with_description("Specifies default encryption for a bucket using server-side encryption with Amazon S3-managed keys (SSE-S3), AWS KMS-managed keys (SSE-KMS), or dual-l..."),
        )
        .property(
            PropertySchema::new("PublicAccessBlockConfiguration", PropertyType::Shape(public_access_block_configuration()))
                .with_description("Configuration that defines how Amazon S3 handles public access."),
        )
        .property(
            PropertySchema::new("WebsiteConfiguration", PropertyType::Shape(website_configuration()))
                .with_description("Information used to configure the bucket as a static website."),
        )
        .property(
            PropertySchema::new("ObjectLockEnabled", PropertyType::Boolean)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("Indicates whether this bucket has an Object Lock configuration enabled. Enable ``ObjectLockEnabled`` when you apply ``ObjectLockConfiguration`` to a b..."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("An arbitrary set of tags (key-value pairs) for this S3 bucket."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) of the specified bucket."),
        )
        .property(
            PropertySchema::new("DomainName", PropertyType::String)
                .read_only()
                .with_description("The IPv4 DNS name of the specified bucket."),
        )
        .property(
            PropertySchema::new("RegionalDomainName", PropertyType::String)
                .read_only()
                .with_description("The regional domain name of the specified bucket."),
        )
        .property(
            PropertySchema::new("WebsiteURL", PropertyType::String)
                .read_only()
                .with_description("The Amazon S3 website endpoint for the specified bucket."),
        )
}
