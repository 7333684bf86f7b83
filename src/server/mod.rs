//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication and DTO conversion
//! - **Service Layer** (`service/`) - Booking rules, availability search and membership lifecycle
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, calendar dispatcher)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions and the calendar notifier
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** resolves the caller through `AuthGuard`, converts the DTO to params
//! 3. **Service** applies the reservation rules, usually inside one transaction
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds
//!
//! Calendar side effects are queued by services after commit and delivered by a
//! background worker, so they never change a response.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
