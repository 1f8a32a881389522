/// HTTP route handlers
pub mod health;
pub mod manifest;
pub mod pages;
