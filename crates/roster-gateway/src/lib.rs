//! HTTP gateway for the roster employee directory.
//!
//! This crate provides the public-facing API for employee records and hosts
//! the bundled web UI. It handles:
//!
//! - REST endpoints under `/api/v1/employees`
//! - The `{status, data|message}` response envelope
//! - Mapping directory failures to HTTP status codes
//! - Static file serving for the web UI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Clients (HTTP / UI)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       roster-gateway                        │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐    │
//! │  │   Router    │ │  Envelope / │ │   Static UI         │    │
//! │  │ + Handlers  │ │  ApiError   │ │   (ServeDir)        │    │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                     ┌──────────────────┐
//!                     │ DirectoryService │
//!                     └──────────────────┘
//!                              │
//!                              ▼
//!                     ┌──────────────────┐
//!                     │   RocksStore     │
//!                     └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use roster_directory::DirectoryService;
//! use roster_gateway::{create_router, GatewayConfig, GatewayState};
//! use roster_store::RocksStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::default();
//!
//! // Initialize dependencies
//! let store = Arc::new(RocksStore::open(&config.data_dir)?);
//! let directory = Arc::new(DirectoryService::new(store));
//!
//! // Create router
//! let app = create_router(GatewayState::new(directory, config.clone()));
//!
//! // Run server
//! let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use response::Envelope;
pub use routes::create_router;
pub use state::GatewayState;
