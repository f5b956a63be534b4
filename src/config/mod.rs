pub mod credentials;
pub mod manager;
pub mod models;
