//! # Data Transfer Objects (DTOs)
//!
//! Wire types exchanged with the MyKugy backend. The backend itself is not part of
//! this workspace; these types pin down the contract the browser app relies on.
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Integers**: credit balances are unsigned; a negative value fails to decode
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/credits?user_email=a%40b.com
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "credits": 40 }
//! ```

pub mod auth;
pub mod credits;

pub use auth::*;
pub use credits::*;
