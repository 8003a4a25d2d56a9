/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # wl-model
//!
//! Declarative request/response models for the WellnessLiving booking and
//! payments API.
//!
//! Every endpoint is described by a [`ModelDefinition`](model::ModelDefinition):
//! an endpoint plus an ordered table of field descriptors saying which fields
//! are request parameters and which are read from the response. The generic
//! [`ModelBase`](model::ModelBase) builds the request, hands it to a
//! [`Transport`](transport::Transport), and decodes the JSON result into the
//! output fields with consistent coercion and nullability rules.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wl_model::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let transport = HttpTransport::new(Config::new())?;
//!
//! let mut model = AddressModel::new()?;
//! model.for_owner(1, Some("B1"), "U9")?;
//! model.execute(&transport).await?;
//!
//! info!("address: {:?}", model.pay_address()?);
//! # Ok(())
//! # }
//! ```

/// Application configuration and rate limiting
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Generic model abstraction
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Concrete endpoint models
pub mod presentation;
/// Transport trait and HTTP implementation
pub mod transport;
/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
