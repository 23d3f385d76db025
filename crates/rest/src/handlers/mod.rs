//! HTTP request handlers for the admin API.

pub mod components;
pub mod health;

pub use components::{
    create_component_handler, delete_component_handler, get_component_handler,
    list_components_handler, update_component_handler,
};
pub use health::{health_handler, liveness_handler};

