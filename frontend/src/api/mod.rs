mod auth;
pub mod client;
mod employee;
mod manager;
pub mod types;

pub use client::*;
pub use types::*;
