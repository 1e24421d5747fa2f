pub mod envelope;
pub mod rest_gateway;
pub mod routes;
