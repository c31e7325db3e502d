//! EC2 resource schemas
//!
//! Generated from the AWS::EC2 resource provider schemas.

pub mod eip;
pub mod internet_gateway;
pub mod nat_gateway;
pub mod route;
pub mod route_table;
pub mod security_group;
pub mod security_group_ingress;
pub mod subnet;
pub mod subnet_route_table_association;
pub mod vpc;
pub mod vpc_gateway_attachment;

use stratus_core::schema::ResourceTypeSchema;

/// Returns all EC2 schemas
pub fn schemas() -> Vec<ResourceTypeSchema> {
    vec![
        vpc::vpc(),
        subnet::subnet(),
        internet_gateway::internet_gateway(),
        vpc_gateway_attachment::vpc_gateway_attachment(),
        route_table::route_table(),
        route::route(),
        subnet_route_table_association::subnet_route_table_association(),
        security_group::security_group(),
        security_group_ingress::security_group_ingress(),
        eip::eip(),
        nat_gateway::nat_gateway(),
    ]
}
