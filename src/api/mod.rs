// HTTP routes and handlers

pub mod form;
pub mod health;
pub mod plan;
pub mod routes;
