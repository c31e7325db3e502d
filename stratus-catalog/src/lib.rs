//! Stratus Catalog
//!
//! Generated AWS CloudFormation resource schemas, grouped per service
//! namespace. Individual files are regenerated with stratus-codegen from
//! the AWS resource provider schemas.

pub mod cloudwatch;
pub mod dynamodb;
pub mod ec2;
pub mod iam;
pub mod kms;
pub mod lambda;
pub mod logs;
pub mod s3;
pub mod shapes;
pub mod sns;
pub mod sqs;

use std::collections::HashMap;

use stratus_core::schema::{ResourceTypeSchema, TypeError};
use stratus_core::template::Resource;

/// Returns every schema in the catalog
pub fn all() -> Vec<ResourceTypeSchema> {
    let mut schemas = Vec::new();
    schemas.extend(ec2::schemas());
    schemas.extend(s3::schemas());
    schemas.extend(iam::schemas());
    schemas.extend(lambda::schemas());
    schemas.extend(sns::schemas());
    schemas.extend(sqs::schemas());
    schemas.extend(dynamodb::schemas());
    schemas.extend(logs::schemas());
    schemas.extend(cloudwatch::schemas());
    schemas.extend(kms::schemas());
    schemas
}

/// Type-name-keyed registry over the catalog: the union of every resource
/// type Stratus knows about, looked up by the `Type` discriminant.
pub struct Catalog {
    schemas: HashMap<String, ResourceTypeSchema>,
}

impl Catalog {
    /// Builds the registry over the full generated catalog.
    pub fn new() -> Self {
        Self::from_schemas(all())
    }

    /// Builds a registry over an explicit schema set. Later entries with a
    /// duplicate type name replace earlier ones.
    pub fn from_schemas(schemas: Vec<ResourceTypeSchema>) -> Self {
        Self {
            schemas: schemas
                .into_iter()
                .map(|s| (s.type_name.clone(), s))
                .collect(),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&ResourceTypeSchema> {
        self.schemas.get(type_name)
    }

    /// Every type name in the registry, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validate a resource declaration's `Properties` bag against the
    /// schema selected by its `Type` discriminant.
    pub fn validate(&self, resource: &Resource) -> Result<(), Vec<TypeError>> {
        match self.get(&resource.resource_type) {
            Some(schema) => schema.validate(&resource.properties),
            None => Err(vec![TypeError::UnknownResourceType {
                type_name: resource.resource_type.clone(),
            }]),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
