//! function schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::Lambda::Function
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::{string_list, tag_list};
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn code() -> ShapeSchema {
    ShapeSchema::new("Code")
        .field(
            PropertySchema::new("ZipFile", PropertyType::String).with_description(
                "(Node.js and Python) The source code of your Lambda function. If you include your \
                 function source inline with this parameter, CFN places it in a file named index...",
            ),
        )
        .field(
            PropertySchema::new("S3Bucket", PropertyType::String)
                .length(3, 63)
                .with_description("An Amazon S3 bucket in the same AWS-Region as your function. The bucket can be in a different AWS-account."),
        )
        .field(
            PropertySchema::new("S3Key", PropertyType::String)
                .length(1, 1024)
                .with_description("The Amazon S3 key of the deployment package."),
        )
        .field(
            PropertySchema::new("S3ObjectVersion", PropertyType::String)
                .length(1, 1024)
                .with_description("For versioned objects, the version of the deployment package object to use."),
        )
        .field(
            PropertySchema::new("ImageUri", PropertyType::String)
                .with_description("URI of a container image in the Amazon ECR registry."),
        )
}

fn environment() -> ShapeSchema {
    ShapeSchema::new("Environment").field(
        PropertySchema::new(
            "Variables",
            PropertyType::Map(Box::new(PropertyType::String)),
        )
        .with_description("Environment variable key-value pairs."),
    )
}

fn vpc_config() -> ShapeSchema {
    ShapeSchema::new("VpcConfig")
        .field(
            PropertySchema::new("SecurityGroupIds", string_list())
                .with_description("A list of VPC security group IDs."),
        )
        .field(
            PropertySchema::new("SubnetIds", string_list())
                .with_description("A list of VPC subnet IDs."),
        )
        .field(PropertySchema::new(
            "Ipv6AllowedForDualStack",
            PropertyType::Boolean,
        ))
}

fn tracing_config() -> ShapeSchema {
    ShapeSchema::new("TracingConfig").field(PropertySchema::new(
        "Mode",
        PropertyType::Enum(vec!["Active".to_string(), "PassThrough".to_string()]),
    ))
}

fn dead_letter_config() -> ShapeSchema {
    ShapeSchema::new("DeadLetterConfig").field(
        PropertySchema::new("TargetArn", PropertyType::String)
            .pattern(r"^(arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*)|()$")
            .with_description("The Amazon Resource Name (ARN) of an Amazon SQS queue or Amazon SNS topic."),
    )
}

/// Returns the schema for AWS::Lambda::Function
pub fn function() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::Lambda::Function")
        .with_description("The ``AWS::Lambda::Function`` resource creates a Lambda function. To create a function, you need a deployment package and an execution role.")
        .property(
            PropertySchema::new("Code", PropertyType::Shape(code()))
                .required()
                .with_description("The code for the function. You can define your function code in multiple ways: provide the function code as a .zip file archive or container image."),
        )
        .property(
            PropertySchema::new("Role", PropertyType::String)
                .required()
                .pattern(r"^arn:(aws[a-zA-Z-]*)?:iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+$")
                .with_description("The Amazon Resource Name (ARN) of the function's execution role."),
        )
        .property(
            PropertySchema::new("FunctionName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 140)
                .with_description("The name of the Lambda function, up to 64 characters in length. If you don't specify a name, CFN generates one. If you specify a name, you cannot perf..."),
        )
        .property(
            PropertySchema::new("Handler", PropertyType::String)
                .length(0, 128)
                .pattern(r"^[^\s]+$")
                .with_description("The name of the method within your code that Lambda calls to run your function. Handler is required if the deployment package is a .zip file archive."),
        )
        .property(
            PropertySchema::new("Runtime", PropertyType::String)
                .with_description("The identifier of the function's runtime. Runtime is required if the deployment package is a .zip file archive. Specifying a runtime results in an err..."),
        )
        .property(
            PropertySchema::new("MemorySize", PropertyType::Integer)
                .range(128.0, 10240.0)
                .with_description("The amount of memory available to the function at runtime. Increasing the function memory also increases its CPU allocation. The default value is 128..."),
        )
        .property(
            PropertySchema::new("Timeout", PropertyType::Integer)
                .range(1.0, 900.0)
                .with_description("The amount of time (in seconds) that Lambda allows a function to run before stopping it. The default is 3 seconds. The maximum allowed value is 900 se..."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .length(0, 256)
                .with_description("A description of the function."),
        )
        .property(
            PropertySchema::new("Environment", PropertyType::Shape(environment()))
                .with_description("Environment variables that are accessible from function code during execution."),
        )
        .property(
            PropertySchema::new("Architectures", PropertyType::List(Box::new(PropertyType::Enum(vec![
                "x86_64".to_string(),
                "arm64".to_string(),
            ]))))
                .with_description("The instruction set architecture that the function supports. Enter a string array with one of the valid values (arm64 or x86_64). The default value i..."),
        )
        .property(
            PropertySchema::new("VpcConfig", PropertyType::Shape(vpc_config()))
                .with_description("For network connectivity to AWS-resources in a VPC, specify a list of security groups and subnets in the VPC."),
        )
        .property(
            PropertySchema::new("TracingConfig", PropertyType::Shape(tracing_config()))
                .with_description("Set ``Mode`` to ``Active`` to sample and trace a subset of incoming requests with X-Ray."),
        )
        .property(
            PropertySchema::new("DeadLetterConfig", PropertyType::Shape(dead_letter_config()))
                .with_description("A dead-letter queue configuration that specifies the queue or topic where Lambda sends asynchronous events when they fail processing."),
        )
        .property(
            PropertySchema::new("Layers", string_list())
                .with_description("A list of function layers to add to the function's execution environment. Specify each layer by its ARN, including the version."),
        )
        .property(
            PropertySchema::new("ReservedConcurrentExecutions", PropertyType::Integer)
                .with_description("The number of simultaneous executions to reserve for the function."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("A list of tags to apply to the function."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("The Amazon Resource Name (ARN) of the function."),
        )
}
