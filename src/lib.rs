pub mod config;
pub mod db;
pub mod demo;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod render;
pub mod seed;
