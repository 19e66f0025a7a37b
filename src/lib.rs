pub mod animation;
pub mod config;
pub mod csr;
pub mod engagement;
pub mod filters;
pub mod models;
pub mod rankings;
pub mod seed;
pub mod standings;
pub mod state;
pub mod store;
