//! Data layer for an item catalog: domain records, a Diesel-backed
//! repository over SQLite, and a thin service facade that maps stored
//! items into transfer shapes for callers (HTTP handlers, other services).
//!
//! The crate exposes no routing or configuration of its own; the embedding
//! application owns those and hands `db::establish_connection_pool` a
//! database URL.

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
