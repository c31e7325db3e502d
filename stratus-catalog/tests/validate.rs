//! Schema-conformance tests over the generated catalog

use serde_json::json;
use stratus_catalog::Catalog;
use stratus_core::schema::TypeError;
use stratus_core::template::{Resource, Template};

fn catalog() -> Catalog {
    Catalog::new()
}

#[test]
fn route_table_requires_vpc_id() {
    let catalog = catalog();

    let valid = Resource::new("AWS::EC2::RouteTable").with_property("VpcId", json!("vpc-123"));
    assert!(catalog.validate(&valid).is_ok());

    let empty = Resource::new("AWS::EC2::RouteTable");
    let errors = catalog.validate(&empty).unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, TypeError::MissingRequired { name } if name == "VpcId"))
    );
}

#[test]
fn tag_missing_value_fails() {
    let catalog = catalog();

    let resource = Resource::new("AWS::EC2::RouteTable")
        .with_property("VpcId", json!("vpc-123"))
        .with_property("Tags", json!([{"Key": "env"}]));
    let errors = catalog.validate(&resource).unwrap_err();
    assert_eq!(errors.len(), 1);

    let complete = Resource::new("AWS::EC2::RouteTable")
        .with_property("VpcId", json!("vpc-123"))
        .with_property("Tags", json!([{"Key": "env", "Value": "prod"}]));
    assert!(catalog.validate(&complete).is_ok());
}

#[test]
fn intrinsics_substitute_for_literals() {
    let catalog = catalog();

    let resource = Resource::new("AWS::EC2::SubnetRouteTableAssociation")
        .with_property("RouteTableId", json!({"Ref": "RouteTable"}))
        .with_property("SubnetId", json!({"Fn::ImportValue": "shared-subnet-id"}));
    assert!(catalog.validate(&resource).is_ok());

    // An intrinsic satisfies a shape-typed position too
    let bucket = Resource::new("AWS::S3::Bucket")
        .with_property("VersioningConfiguration", json!({"Fn::If": ["IsProd", {"Status": "Enabled"}, {"Status": "Suspended"}]}));
    assert!(catalog.validate(&bucket).is_ok());
}

#[test]
fn unknown_property_rejected() {
    let catalog = catalog();

    let resource = Resource::new("AWS::EC2::RouteTable")
        .with_property("VpcId", json!("vpc-123"))
        .with_property("VpcID", json!("vpc-456"));
    let errors = catalog.validate(&resource).unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, TypeError::UnknownProperty { name } if name == "VpcID"))
    );
}

#[test]
fn read_only_property_rejected_as_input() {
    let catalog = catalog();

    let resource = Resource::new("AWS::EC2::VPC")
        .with_property("CidrBlock", json!("10.0.0.0/16"))
        .with_property("VpcId", json!("vpc-123"));
    let errors = catalog.validate(&resource).unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, TypeError::ReadOnlyProperty { name } if name == "VpcId"))
    );
}

#[test]
fn unknown_resource_type_rejected() {
    let catalog = catalog();

    let resource = Resource::new("AWS::EC2::RouteTabel");
    let errors = catalog.validate(&resource).unwrap_err();
    assert!(matches!(
        &errors[0],
        TypeError::UnknownResourceType { type_name } if type_name == "AWS::EC2::RouteTabel"
    ));
}

#[test]
fn enum_values_are_restricted() {
    let catalog = catalog();

    let valid = Resource::new("AWS::SNS::Subscription")
        .with_property("Protocol", json!("sqs"))
        .with_property("TopicArn", json!("arn:aws:sns:us-east-1:123456789012:topic"));
    assert!(catalog.validate(&valid).is_ok());

    let invalid = Resource::new("AWS::SNS::Subscription")
        .with_property("Protocol", json!("carrier-pigeon"))
        .with_property("TopicArn", json!("arn:aws:sns:us-east-1:123456789012:topic"));
    let errors = catalog.validate(&invalid).unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, TypeError::InvalidEnumValue { value, .. } if value == "carrier-pigeon"))
    );
}

#[test]
fn numeric_range_constraints_apply() {
    let catalog = catalog();

    let valid = Resource::new("AWS::SQS::Queue").with_property("DelaySeconds", json!(300));
    assert!(catalog.validate(&valid).is_ok());

    let invalid = Resource::new("AWS::SQS::Queue").with_property("DelaySeconds", json!(901));
    let errors = catalog.validate(&invalid).unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, TypeError::ValueOutOfRange { .. }))
    );
}

#[test]
fn bucket_name_constraints_apply() {
    let catalog = catalog();

    let valid = Resource::new("AWS::S3::Bucket").with_property("BucketName", json!("my-bucket"));
    assert!(catalog.validate(&valid).is_ok());

    let too_short = Resource::new("AWS::S3::Bucket").with_property("BucketName", json!("ab"));
    assert!(catalog.validate(&too_short).is_err());

    let uppercase = Resource::new("AWS::S3::Bucket").with_property("BucketName", json!("MyBucket"));
    assert!(catalog.validate(&uppercase).is_err());
}

#[test]
fn nested_shapes_validate_recursively() {
    let catalog = catalog();

    let valid = Resource::new("AWS::S3::Bucket").with_property(
        "BucketEncryption",
        json!({
            "ServerSideEncryptionConfiguration": [{
                "ServerSideEncryptionByDefault": {"SSEAlgorithm": "aws:kms", "KMSMasterKeyID": {"Ref": "Key"}},
                "BucketKeyEnabled": true,
            }],
        }),
    );
    assert!(catalog.validate(&valid).is_ok());

    // SSEAlgorithm is required inside ServerSideEncryptionByDefault
    let missing = Resource::new("AWS::S3::Bucket").with_property(
        "BucketEncryption",
        json!({
            "ServerSideEncryptionConfiguration": [{
                "ServerSideEncryptionByDefault": {"KMSMasterKeyID": "alias/my-key"},
            }],
        }),
    );
    assert!(catalog.validate(&missing).is_err());
}

#[test]
fn dynamodb_key_schema_requires_key_type() {
    let catalog = catalog();

    let valid = Resource::new("AWS::DynamoDB::Table").with_property(
        "KeySchema",
        json!([{"AttributeName": "pk", "KeyType": "HASH"}]),
    );
    assert!(catalog.validate(&valid).is_ok());

    let bad_key_type = Resource::new("AWS::DynamoDB::Table").with_property(
        "KeySchema",
        json!([{"AttributeName": "pk", "KeyType": "PARTITION"}]),
    );
    assert!(catalog.validate(&bad_key_type).is_err());
}

#[test]
fn type_names_are_canonical_and_unique() {
    let schemas = stratus_catalog::all();
    let catalog = Catalog::from_schemas(stratus_catalog::all());

    // No duplicate type names across service modules
    assert_eq!(schemas.len(), catalog.len());

    for name in catalog.type_names() {
        let parts: Vec<&str> = name.split("::").collect();
        assert_eq!(parts.len(), 3, "bad type name: {name}");
        assert_eq!(parts[0], "AWS");
    }
}

#[test]
fn template_round_trips_and_validates() {
    let doc = json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Resources": {
            "Vpc": {
                "Type": "AWS::EC2::VPC",
                "Properties": {"CidrBlock": "10.0.0.0/16"},
            },
            "Igw": {
                "Type": "AWS::EC2::InternetGateway",
            },
            "Attachment": {
                "Type": "AWS::EC2::VPCGatewayAttachment",
                "Properties": {
                    "VpcId": {"Ref": "Vpc"},
                    "InternetGatewayId": {"Ref": "Igw"},
                },
                "DependsOn": ["Vpc", "Igw"],
            },
        },
    });

    let template: Template = serde_json::from_value(doc.clone()).unwrap();
    let catalog = catalog();
    for resource in template.resources.values() {
        assert!(catalog.validate(resource).is_ok());
    }

    // Idempotent acceptance: serialize back and validate again
    let round_tripped = serde_json::to_value(&template).unwrap();
    assert_eq!(round_tripped, doc);
    let reparsed: Template = serde_json::from_value(round_tripped).unwrap();
    for resource in reparsed.resources.values() {
        assert!(catalog.validate(resource).is_ok());
    }
}
