//! key schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::KMS::Key
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::tag_list;
use stratus_core::schema::{PropertySchema, PropertyType, ResourceTypeSchema, UpdateBehavior};

/// Returns the schema for AWS::KMS::Key
pub fn key() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::KMS::Key")
        .with_description("The ``AWS::KMS::Key`` resource specifies a KMS key in KMSlong. You can use this resource to create symmetric encryption KMS keys, asymmetric KMS keys...")
        .property(
            PropertySchema::new("KeyPolicy", PropertyType::Json)
                .with_description("The key policy to attach to the KMS key. If you provide a key policy, it must meet the key policy criteria. If you don't provide a key policy, KMS at..."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .length(0, 8192)
                .with_description("A description of the KMS key. Use a description that helps you to distinguish this KMS key from others in the account."),
        )
        .property(
            PropertySchema::new("Enabled", PropertyType::Boolean)
                .with_description("Specifies whether the KMS key is enabled. Disabled KMS keys cannot be used in cryptographic operations."),
        )
        .property(
            PropertySchema::new("EnableKeyRotation", PropertyType::Boolean)
                .with_description("Enables automatic rotation of the key material for the specified KMS key. By default, automatic key rotation is not enabled."),
        )
        .property(
            PropertySchema::new("KeySpec", PropertyType::Enum(vec![
                "SYMMETRIC_DEFAULT".to_string(),
                "RSA_2048".to_string(),
                "RSA_3072".to_string(),
                "RSA_4096".to_string(),
                "ECC_NIST_P256".to_string(),
                "ECC_NIST_P384".to_string(),
                "ECC_NIST_P521".to_string(),
                "ECC_SECG_P256K1".to_string(),
                "HMAC_224".to_string(),
                "HMAC_256".to_string(),
                "HMAC_384".to_string(),
                "HMAC_512".to_string(),
                "SM2".to_string(),
            ]))
                .with_description("Specifies the type of KMS key to create. The default value, ``SYMMETRIC_DEFAULT``, creates a KMS key with a 256-bit symmetric key for encryption and..."),
        )
        .property(
            PropertySchema::new("KeyUsage", PropertyType::Enum(vec![
                "ENCRYPT_DECRYPT".to_string(),
                "SIGN_VERIFY".to_string(),
                "GENERATE_VERIFY_MAC".to_string(),
                "KEY_AGREEMENT".to_string(),
            ]))
                .with_description("Determines the cryptographic operations for which you can use the KMS key. The default value is ``ENCRYPT_DECRYPT``. This property is required for as..."),
        )
        .property(
            PropertySchema::new("MultiRegion", PropertyType::Boolean)
                .update_requires(UpdateBehavior::Replacement)
                .with_description("Creates a multi-Region primary key that you can replicate in other AWS-Regions. You can't change the ``MultiRegion`` value after the KMS key is creat..."),
        )
        .property(
            PropertySchema::new("Origin", PropertyType::Enum(vec![
                "AWS_KMS".to_string(),
                "EXTERNAL".to_string(),
            ]))
                .with_description("The source of the key material for the KMS key. You cannot change the origin after you create the KMS key. The default is ``AWS_KMS``."),
        )
        .property(
            PropertySchema::new("PendingWindowInDays", PropertyType::Integer)
                .range(7.0, 30.0)
                .with_description("Specifies the number of days in the waiting period before KMS deletes a KMS key that has been removed from a CloudFormation stack. Enter a value betw..."),
        )
        .property(
            PropertySchema::new("RotationPeriodInDays", PropertyType::Integer)
                .range(90.0, 2560.0)
                .with_description("Specifies a custom period of time between each rotation date. If no value is specified, the default value is 365 days."),
        )
        .property(
            PropertySchema::new("BypassPolicyLockoutSafetyCheck", PropertyType::Boolean)
                .with_description("Skips (\"bypasses\") the key policy lockout safety check. The default value is false."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("Assigns one or more tags to the replica key."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) of the KMS key, such as arn:aws:kms:us-west-2:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab."),
        )
        .property(
            PropertySchema::new("KeyId", PropertyType::String)
                .read_only()
                .with_description("The key ID of the KMS key, such as 1234abcd-12ab-34cd-56ef-1234567890ab."),
        )
}
