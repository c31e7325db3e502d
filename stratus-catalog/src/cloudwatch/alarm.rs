//! alarm schema definition
//!
//! Generated from CloudFormation resource provider schema: AWS::CloudWatch::Alarm
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::shapes::{string_list, tag_list};
use stratus_core::schema::{
    PropertySchema, PropertyType, ResourceTypeSchema, ShapeSchema, UpdateBehavior,
};

fn dimension() -> ShapeSchema {
    ShapeSchema::new("Dimension")
        .field(
            PropertySchema::new("Name", PropertyType::String)
                .required()
                .length(1, 255)
                .with_description("The name of the dimension, from 1-255 characters in length."),
        )
        .field(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .length(1, 255)
                .with_description("The value for the dimension, from 1-255 characters in length."),
        )
}

/// Returns the schema for AWS::CloudWatch::Alarm
pub fn alarm() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::CloudWatch::Alarm")
        .with_description("The ``AWS::CloudWatch::Alarm`` type specifies an alarm and associates it with the specified metric or metric math expression. When this operation crea...")
        .property(
            PropertySchema::new("ComparisonOperator", PropertyType::Enum(vec![
                "GreaterThanOrEqualToThreshold".to_string(),
                "GreaterThanThreshold".to_string(),
                "LessThanThreshold".to_string(),
                "LessThanOrEqualToThreshold".to_string(),
                "LessThanLowerOrGreaterThanUpperThreshold".to_string(),
                "LessThanLowerThreshold".to_string(),
                "GreaterThanUpperThreshold".to_string(),
            ]))
                .required()
                .with_description("The arithmetic operation to use when comparing the specified statistic and threshold. The specified statistic value is used as the first operand."),
        )
        .property(
            PropertySchema::new("EvaluationPeriods", PropertyType::Integer)
                .required()
                .range(1.0, f64::MAX)
                .with_description("The number of periods over which data is compared to the specified threshold. If you are setting an alarm that requires that a number of consecutive..."),
        )
        .property(
            PropertySchema::new("AlarmName", PropertyType::String)
                .update_requires(UpdateBehavior::Replacement)
                .length(1, 255)
                .with_description("The name of the alarm. If you don't specify a name, CFN generates a unique physical ID and uses that ID for the alarm name."),
        )
        .property(
            PropertySchema::new("AlarmDescription", PropertyType::String)
                .length(0, 1024)
                .with_description("The description of the alarm."),
        )
        .property(
            PropertySchema::new("MetricName", PropertyType::String)
                .length(1, 255)
                .with_description("The name of the metric associated with the alarm. This is required for an alarm based on a metric. For an alarm based on a math expression, you use ``..."),
        )
        .property(
            PropertySchema::new("Namespace", PropertyType::String)
                .length(1, 255)
                .pattern(r"^[^:].*$")
                .with_description("The namespace of the metric associated with the alarm. This is required for an alarm based on a metric."),
        )
        .property(
            PropertySchema::new("Statistic", PropertyType::Enum(vec![
                "SampleCount".to_string(),
                "Average".to_string(),
                "Sum".to_string(),
                "Minimum".to_string(),
                "Maximum".to_string(),
            ]))
                .with_description("The statistic for the metric associated with the alarm, other than percentile. For percentile statistics, use ``ExtendedStatistic``."),
        )
        .property(
            PropertySchema::new("ExtendedStatistic", PropertyType::String)
                .pattern(r"^p(\d{1,2}(\.\d{0,2})?|100)$")
                .with_description("The percentile statistic for the metric associated with the alarm. Specify a value between p0.0 and p100."),
        )
        .property(
            PropertySchema::new("Period", PropertyType::Integer)
                .with_description("The period, in seconds, over which the statistic is applied. This is required for an alarm based on a metric. Valid values are 10, 30, 60, and any mu..."),
        )
        .property(
            PropertySchema::new("Threshold", PropertyType::Double)
                .with_description("The value to compare with the specified statistic."),
        )
        .property(
            PropertySchema::new("TreatMissingData", PropertyType::Enum(vec![
                "breaching".to_string(),
                "notBreaching".to_string(),
                "ignore".to_string(),
                "missing".to_string(),
            ]))
                .with_description("Sets how this alarm is to handle missing data points. Valid values are ``breaching``, ``notBreaching``, ``ignore``, and ``missing``."),
        )
        .property(
            PropertySchema::new("ActionsEnabled", PropertyType::Boolean)
                .with_description("Indicates whether actions should be executed during any changes to the alarm state. The default is TRUE."),
        )
        .property(
            PropertySchema::new("AlarmActions", string_list())
                .with_description("The list of actions to execute when this alarm transitions into an ALARM state from any other state. Specify each action as an Amazon Resource Name (..."),
        )
        .property(
            PropertySchema::new("OKActions", string_list())
                .with_description("The actions to execute when this alarm transitions to the OK state from any other state. Each action is specified as an Amazon Resource Name (ARN)."),
        )
        .property(
            PropertySchema::new("InsufficientDataActions", string_list())
                .with_description("The actions to execute when this alarm transitions to the INSUFFICIENT_DATA state from any other state."),
        )
        .property(
            PropertySchema::new("Dimensions", PropertyType::List(Box::new(PropertyType::Shape(dimension()))))
                .with_description("The dimensions for the metric associated with the alarm. For an alarm based on a math expression, you can't specify ``Dimensions``. Instead, you use..."),
        )
        .property(
            PropertySchema::new("DatapointsToAlarm", PropertyType::Integer)
                .range(1.0, f64::MAX)
                .with_description("The number of datapoints that must be breaching to trigger the alarm. This is used only if you are setting an M out of N alarm."),
        )
        .property(
            PropertySchema::new("Unit", PropertyType::String)
                .with_description("The unit of the metric associated with the alarm. Specify this only if you are creating an alarm based on a metric. If not specified, the alarm compa..."),
        )
        .property(
            PropertySchema::new("Tags", tag_list())
                .with_description("A list of key-value pairs to associate with the alarm. You can associate as many as 50 tags with an alarm."),
        )
        .property(
            PropertySchema::new("Arn", PropertyType::String)
                .read_only()
                .with_description("Amazon Resource Name (ARN) is a unique identifier for the alarm, such as arn:aws:cloudwatch:us-west-2:123456789012:alarm:myCPUAlarm."),
        )
}
