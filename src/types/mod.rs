pub mod company;
pub mod config;
pub mod user;
