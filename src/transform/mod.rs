pub mod base;
pub mod catalog;
pub mod composite;
pub mod config;
pub mod path;
pub mod strategy;
