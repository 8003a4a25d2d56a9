// Shared fixtures for unit tests

use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use wl_model::prelude::*;

/// Transport replaying scripted results and recording every request
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<Value, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(response: Value) -> Self {
        Self::new(vec![Ok(response)])
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn call(&self, request: &ModelRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())))
    }
}

/// Transport that never answers
pub struct PendingTransport;

#[async_trait]
impl Transport for PendingTransport {
    async fn call(&self, _request: &ModelRequest) -> Result<Value, TransportError> {
        std::future::pending::<()>().await;
        Err(TransportError::Other("unreachable".to_string()))
    }
}

/// Test-only model exercising decimals, booleans and `Both` fields
///
/// `m_total` is a nullable `Both` field, `i_revision` a required one.
pub struct Quote;

impl ModelDefinition for Quote {
    const NAME: &'static str = "QuoteModel";

    fn endpoint() -> Endpoint {
        Endpoint::post("Test/Quote/Quote.json")
    }

    fn registry() -> Result<&'static FieldRegistry, AppError> {
        static REGISTRY: once_cell::sync::OnceCell<FieldRegistry> =
            once_cell::sync::OnceCell::new();
        REGISTRY.get_or_try_init(|| {
            let mut registry = FieldRegistry::new(Self::NAME);
            registry
                .register(FieldDescriptor::input("k_id", FieldType::String))?
                .register(
                    FieldDescriptor::input("is_active", FieldType::Boolean).with_default(false),
                )?
                .register(FieldDescriptor::both("m_total", FieldType::Decimal).nullable())?
                .register(FieldDescriptor::both("i_revision", FieldType::Integer).with_default(0))?
                .register(FieldDescriptor::output("f_price", FieldType::Decimal))?
                .register(
                    FieldDescriptor::output("a_tag", FieldType::list(FieldType::String)).nullable(),
                )?;
            Ok(registry)
        })
    }
}

pub type QuoteModel = ModelBase<Quote>;
