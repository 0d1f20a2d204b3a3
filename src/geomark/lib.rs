//! # Geomark Architecture
//!
//! Geomark is a **UI-agnostic map-annotation library**. The HTTP server is a thin
//! client of the library; every operation it exposes is equally callable from a
//! test, a CLI, or an embedded frontend.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/, wired by main.rs)                       │
//! │  - Routes, session-cookie auth, status codes, JSON bodies   │
//! │  - The ONLY place that knows about axum and HTTP            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Generic over the storage backend                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, ownership policy, pure business logic        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract FeatureStore trait                              │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes regular Rust
//! arguments, returns `Result`, never touches a socket, and never assumes a
//! request context. The ownership invariant (a record is mutable only by the
//! user that created it) is enforced once, in the command layer's policy
//! function, not per endpoint.
//!
//! ## Client-State Modules
//!
//! The map frontend keeps state the server never sees. Those pieces live here
//! as plain library code so they stay testable:
//!
//! - [`tools`]: mutually exclusive add/delete/edit drawing modes, one state
//!   machine per tool family (lines, markers)
//! - [`map`]: the fly-to request store coordinating list clicks with the view
//! - [`markers`]: locally persisted marker list (the localStorage analog)
//! - [`layers`]: the fixed tile-layer registry and the zoom control model
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade for feature operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`FeatureRecord`, `Marker`)
//! - [`geojson`]: GeoJSON Feature payload validation
//! - [`http`]: axum router, handlers, and session auth (server only)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod geojson;
pub mod http;
pub mod layers;
pub mod map;
pub mod markers;
pub mod model;
pub mod store;
pub mod tools;
