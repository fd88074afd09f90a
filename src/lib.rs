pub mod app;
pub mod card;
pub mod config;
pub mod detail;
pub mod home;
pub mod models;
pub mod page;
pub mod route;
pub mod search;
pub mod tmdb;
