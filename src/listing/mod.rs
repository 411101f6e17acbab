// src/listing/mod.rs
pub mod client;
pub mod models;

pub use client::ListingClient;
pub use models::{KeywordSet, ScholarshipRecord};
