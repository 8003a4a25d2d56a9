/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::TransportError;
use crate::model::request::ModelRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Performs the network call for a built [`ModelRequest`]
///
/// Implementations own authentication, retries and timeouts. The model layer
/// only sees the decoded JSON body or the failure.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Calls the endpoint of `request` with its parameters
    async fn call(&self, request: &ModelRequest) -> Result<Value, TransportError>;
}
