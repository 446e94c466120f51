//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod missions;
pub mod planets;
pub mod scientists;

pub use missions::create_mission_handler;
pub use planets::planet_list_handler;
pub use scientists::{
    create_scientist_handler, delete_scientist_handler, scientist_detail_handler,
    scientist_list_handler, update_scientist_handler,
};
