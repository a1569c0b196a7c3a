pub mod resolve;
pub mod routes;
