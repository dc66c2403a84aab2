//! Workout session planning: timeline compilation, load progression and
//! training-history bookkeeping, served over a small JSON API.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod progression;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod timeline;
pub mod version;
