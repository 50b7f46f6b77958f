pub mod handlers;
pub mod renderer;
pub mod routes;
pub mod services;
