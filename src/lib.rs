pub mod api;
pub mod app_state;
pub mod config;
pub mod form;
pub mod forwarder;
pub mod health;
pub mod pages;
pub mod startup;
pub mod telemetry;
