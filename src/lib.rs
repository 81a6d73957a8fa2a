pub mod aggregate;
pub mod display;
pub mod error;
pub mod extract;
pub mod loader;
pub mod timefmt;
pub mod web;
