//! Web front-end for browser-based string inspection.
//!
//! This module provides a small interactive web interface using Axum.
//! Users paste a string into a form and get back the per-character
//! analysis as an HTML table.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! string-inspector serve
//!
//! # Custom port and auto-open browser
//! string-inspector serve --port 3000 --open
//!
//! # Bind to all interfaces
//! string-inspector serve --address 0.0.0.0
//! ```
//!
//! ## Endpoints
//!
//! - `GET /` - Input form page
//! - `POST /` - Form submission, redirects to the analysis endpoint
//! - `GET /api/` - Analysis endpoint (`string` and `ascii` query parameters)

pub mod server;
