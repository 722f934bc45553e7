pub mod config;
pub mod domain;
pub mod inbound;
pub mod messages;
pub mod outbound;

pub use domain::user;
pub use outbound::repositories;
