//! Core library for cardfetch
//!
//! This crate implements the **Functional Core** of the cardfetch application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`cardfetch_core`** (this crate): Pure transformation functions with zero I/O
//! - **`cardfetch`**: HTTP requests, orchestration and the command line (the Imperative Shell)
//!
//! Everything needed to turn a card name into a chat attachment lives here
//! except the request itself: query shaping, URL construction, response
//! parsing and the attachment rewrite transforms.
//!
//! # Module Organization
//!
//! - [`attachment`]: The chat attachment payload
//! - [`query`]: Query parameters, endpoints and URL construction
//! - [`upstream`]: Normalized upstream responses and search payloads
//! - [`variant`]: The four response kinds (text, image, price, multi)
//! - [`transforms`]: Attachment rewrites and the ordered chain that runs them
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use cardfetch_core::query::Endpoints;
//! use cardfetch_core::upstream::UpstreamResponse;
//! use cardfetch_core::variant::{CardResponse, ResponseKind};
//!
//! let card = CardResponse::new(ResponseKind::Image, "bolt", Endpoints::default());
//!
//! // Fixture response, no HTTP required
//! let response = UpstreamResponse::new(
//!     200,
//!     [("x-scryfall-card-image", "https://img.example/bolt.jpg")],
//!     "Lightning Bolt {R}\nInstant",
//! );
//!
//! let attachment = card.finish(card.parse_attachment(&response)?);
//! assert_eq!(attachment.title, "Lightning Bolt");
//! ```

pub mod attachment;
pub mod query;
pub mod transforms;
pub mod upstream;
pub mod variant;
