/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Method;
use serde::{Serialize, Serializer};

/// Remote endpoint targeted by a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Path relative to the API base URL, e.g. `Wl/Pay/Address/Address.json`
    pub path: &'static str,
    /// HTTP method used to call it
    #[serde(serialize_with = "serialize_method")]
    pub method: Method,
}

impl Endpoint {
    /// Endpoint called with `GET`
    #[must_use]
    pub fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    /// Endpoint called with `POST`
    #[must_use]
    pub fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }
}

fn serialize_method<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(method.as_str())
}

/// Request built from the input fields of a model
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRequest {
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Wire parameters in declaration order
    pub params: Vec<(String, String)>,
}

impl ModelRequest {
    /// Value of the first parameter named `name`
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parameter names in wire order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(key, _)| key.as_str())
    }
}
