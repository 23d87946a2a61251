pub mod breakdown_controller;

pub use breakdown_controller::configure_breakdown_routes;
