mod auth;
mod config;
