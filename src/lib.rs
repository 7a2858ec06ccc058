pub mod catalog;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
