//! # Shortly
//!
//! A fast in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, repository trait, policy seam
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and policy implementations
//! - **API Layer** ([`api`]) - REST API handlers and DTOs
//!
//! ## Features
//!
//! - Custom short codes sharing one namespace with generated ones
//! - Cryptographically random code generation with bounded collision retry
//! - Link expiry: expired codes answer 410 Gone, unknown codes 404
//! - Pluggable content policy over URLs and custom codes
//! - Optional background sweep reclaiming expired mappings
//!
//! The registry lives in process memory; nothing survives a restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export BASE_URL="https://sho.example"
//! export POLICY_DENYLIST="badword1,badword2"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectService, ShortenService};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::policy::ContentPolicy;
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::policy::{AllowAllPolicy, DenyListPolicy};
    pub use crate::infrastructure::store::MemoryMappingStore;
    pub use crate::state::AppState;
}
