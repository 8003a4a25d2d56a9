/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # wl-model Prelude
//!
//! Imports the types needed for most interactions with the models:
//!
//! ```rust
//! use wl_model::prelude::*;
//!
//! let mut model = PurchaseModel::new().unwrap();
//! model.set("k_business", "B1").unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the HTTP transport
pub use crate::application::config::{Config, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{AppError, ModelResult, TransportError};

// ============================================================================
// MODEL ABSTRACTION
// ============================================================================

/// Field descriptors, registries, values and the generic model
pub use crate::model::{
    DecimalString, Direction, Endpoint, FieldDescriptor, FieldRegistry, FieldType, FieldValue,
    ModelBase, ModelDefinition, ModelRequest, ModelState,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport trait and HTTP implementation
pub use crate::transport::{HttpTransport, RetryConfig, Transport};

/// Rate limiter used by the HTTP transport
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// ENDPOINT MODELS
// ============================================================================

/// Concrete models and record views
pub use crate::presentation::{
    Address, AddressModel, InstallmentTemplate, Purchase, PurchaseModel, PurchaseOption,
    VisitLimit,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
