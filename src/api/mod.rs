//! Catalog API client and response models.

mod client;
mod models;

pub use client::{ApiClient, ApiError};
pub use models::{
    Clip, Developer, GameDetail, GameSummary, Genre, PlatformEntry, PlatformRef, Requirements,
};
