/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Generic model behaviour shared by every endpoint definition.
//!
//! A definition type implements [`ModelDefinition`] (endpoint + field table);
//! [`ModelBase`] carries the values of one instance and implements
//! `set`/`get`, request building, execution and response decoding.

use crate::error::AppError;
use crate::model::field::{Direction, FieldDescriptor, FieldType};
use crate::model::registry::FieldRegistry;
use crate::model::request::{Endpoint, ModelRequest};
use crate::model::value::{FieldValue, json_kind};
use crate::transport::Transport;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

static NULL_VALUE: FieldValue = FieldValue::Null;

/// Static description of one endpoint model
///
/// `registry` must build its table once, typically inside a
/// `once_cell::sync::OnceCell`, and hand out the same reference afterwards.
pub trait ModelDefinition: 'static {
    /// Model name used in logs and errors
    const NAME: &'static str;

    /// Endpoint the model targets
    fn endpoint() -> Endpoint;

    /// Field table of the model
    ///
    /// # Errors
    /// Any registration error, e.g. `DuplicateField`
    fn registry() -> Result<&'static FieldRegistry, AppError>;
}

/// Lifecycle state of a model instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelState {
    /// Holds construction-time defaults only
    Constructed,
    /// Inputs changed since the last execution, or an execution is in flight
    Ready,
    /// The last execution succeeded
    Succeeded,
    /// The last execution failed; outputs hold the previous result
    Failed,
}

/// Values and state of one model instance
///
/// Not meant to be shared between tasks while executing: `set` and `execute`
/// take `&mut self`, so every execution sees a consistent snapshot of the
/// inputs.
pub struct ModelBase<M: ModelDefinition> {
    registry: &'static FieldRegistry,
    values: Vec<Option<FieldValue>>,
    state: ModelState,
    has_result: bool,
    _definition: PhantomData<fn() -> M>,
}

impl<M: ModelDefinition> ModelBase<M> {
    /// Creates an instance holding the declared defaults
    ///
    /// # Errors
    /// Any error raised while building the field table
    pub fn new() -> Result<Self, AppError> {
        let registry = M::registry()?;
        let values = registry.iter().map(|d| d.default.clone()).collect();
        Ok(Self {
            registry,
            values,
            state: ModelState::Constructed,
            has_result: false,
            _definition: PhantomData,
        })
    }

    /// Field table of the model
    #[must_use]
    pub fn registry(&self) -> &'static FieldRegistry {
        self.registry
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> ModelState {
        self.state
    }

    /// Whether at least one execution has succeeded
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.has_result
    }

    /// Assigns an input field
    ///
    /// The value is coerced to the declared type before it is stored, so
    /// `"1"` assigned to an integer field reads back as `1`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of an `Input` or `Both` field
    /// * `value` - Anything convertible into a JSON value
    ///
    /// # Returns
    ///
    /// The model itself, so assignments can be chained
    ///
    /// # Example
    ///
    /// ```ignore
    /// use wl_model::prelude::*;
    ///
    /// let mut model = AddressModel::new()?;
    /// model.set("id_pay_owner", 1)?.set("k_id", "U9")?;
    /// ```
    ///
    /// # Errors
    /// * `UnknownField` if `name` is not a declared input field
    /// * `TypeMismatch` if the value cannot be coerced to the declared type
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self, AppError> {
        let registry = self.registry;
        let (index, descriptor) = registry.lookup(name)?;
        if !descriptor.direction.is_input() {
            return Err(AppError::UnknownField {
                model: M::NAME,
                field: name.to_string(),
            });
        }

        let value = coerce_field(descriptor, value.into())?;
        debug!("{}.{} = {:?}", M::NAME, name, value);
        self.values[index] = Some(value);
        self.state = ModelState::Ready;
        Ok(self)
    }

    /// Reads a field
    ///
    /// Output fields hold the last successful result; after a later `set`
    /// they stay readable until the next successful execution replaces them.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of any declared field
    ///
    /// # Returns
    ///
    /// The current value, the declared default, or [`FieldValue::Null`] for
    /// an unset nullable field
    ///
    /// # Example
    ///
    /// ```ignore
    /// use wl_model::prelude::*;
    ///
    /// let model = PurchaseModel::new()?;
    /// assert_eq!(model.get("id_mode")?.as_i64(), Some(BOOK_MODE_APP_FRONTEND));
    /// ```
    ///
    /// # Errors
    /// * `UnknownField` if `name` is not declared
    /// * `FieldNotYetAvailable` for an output-only field before any successful
    ///   execution, or for a required input that was never set
    pub fn get(&self, name: &str) -> Result<&FieldValue, AppError> {
        let (index, descriptor) = self.registry.lookup(name)?;
        if descriptor.direction == Direction::Output && !self.has_result {
            return Err(AppError::FieldNotYetAvailable {
                field: name.to_string(),
            });
        }

        match &self.values[index] {
            Some(value) => Ok(value),
            None if descriptor.accepts_null() => Ok(&NULL_VALUE),
            None => Err(AppError::FieldNotYetAvailable {
                field: name.to_string(),
            }),
        }
    }

    /// Reads a field and deserializes its JSON form into `T`
    ///
    /// # Errors
    /// Errors of [`get`](Self::get), or `Json` if the value does not fit `T`
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, AppError> {
        let value = self.get(name)?;
        Ok(serde_json::from_value(value.to_json())?)
    }

    /// Builds the request from the input fields
    ///
    /// Inputs with neither a value nor a default are left out when nullable.
    ///
    /// # Errors
    /// `MissingRequiredField` for a non-nullable input that has no value
    pub fn build_request(&self) -> Result<ModelRequest, AppError> {
        let mut params = Vec::new();
        for (descriptor, value) in self.registry.iter().zip(&self.values) {
            if !descriptor.direction.is_input() {
                continue;
            }
            match value {
                Some(value) => value.append_wire_params(descriptor.name, &mut params),
                None if descriptor.accepts_null() => {}
                None => {
                    return Err(AppError::MissingRequiredField {
                        field: descriptor.name.to_string(),
                    });
                }
            }
        }

        let request = ModelRequest {
            endpoint: M::endpoint(),
            params,
        };
        debug!("Built request for {}: {}", M::NAME, request);
        Ok(request)
    }

    /// Builds the request, calls the transport and decodes the result
    ///
    /// On failure the output fields keep their previous values. Dropping the
    /// returned future while the transport is pending leaves the instance in
    /// [`ModelState::Ready`] with outputs untouched.
    ///
    /// # Arguments
    ///
    /// * `transport` - Performs the network call; any [`Transport`], including
    ///   `dyn Transport`
    ///
    /// # Returns
    ///
    /// `Ok(())` once every output field holds the decoded result. Any error
    /// leaves the model in [`ModelState::Failed`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// use wl_model::prelude::*;
    ///
    /// let transport = HttpTransport::new(Config::new())?;
    /// let mut model = AddressModel::new()?;
    /// model.for_owner(1, Some("B1"), "U9")?;
    /// model.execute(&transport).await?;
    /// let address = model.get("a_pay_address")?;
    /// ```
    ///
    /// # Errors
    /// * `MissingRequiredField` from request building
    /// * `Transport` when the call fails
    /// * `MissingResponseField` / `TypeMismatch` from decoding
    pub async fn execute<T>(&mut self, transport: &T) -> Result<(), AppError>
    where
        T: Transport + ?Sized,
    {
        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => {
                warn!("{} not executed: {}", M::NAME, e);
                self.state = ModelState::Failed;
                return Err(e);
            }
        };
        self.state = ModelState::Ready;

        debug!(
            "Executing {} ({} {})",
            M::NAME,
            request.endpoint.method,
            request.endpoint.path
        );
        let raw = match transport.call(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{} failed: {}", M::NAME, e);
                self.state = ModelState::Failed;
                return Err(e.into());
            }
        };

        self.decode_response(raw)?;
        info!("{} executed", M::NAME);
        Ok(())
    }

    /// Decodes a raw result into the output fields
    ///
    /// Nothing is written unless every output decodes. Absent nullable
    /// outputs, `Both` fields included, become `null`.
    ///
    /// # Errors
    /// * `TypeMismatch` if `raw` is not an object or a value has the wrong type
    /// * `MissingResponseField` for an absent non-nullable output
    pub fn decode_response(&mut self, raw: Value) -> Result<(), AppError> {
        match self.stage_outputs(raw) {
            Ok(staged) => {
                for (index, value) in staged {
                    self.values[index] = Some(value);
                }
                self.has_result = true;
                self.state = ModelState::Succeeded;
                Ok(())
            }
            Err(e) => {
                warn!("{} response rejected: {}", M::NAME, e);
                self.state = ModelState::Failed;
                Err(e)
            }
        }
    }

    fn stage_outputs(&self, raw: Value) -> Result<Vec<(usize, FieldValue)>, AppError> {
        let mut object = match raw {
            Value::Object(object) => object,
            other => {
                return Err(AppError::TypeMismatch {
                    field: format!("{}.<response>", M::NAME),
                    expected: FieldType::map(FieldType::Json).to_string(),
                    found: json_kind(&other).to_string(),
                });
            }
        };

        let mut staged = Vec::new();
        for (index, descriptor) in self.registry.iter().enumerate() {
            if !descriptor.direction.is_output() {
                continue;
            }
            let value = match object.remove(descriptor.name) {
                Some(raw) => coerce_field(descriptor, raw)?,
                None if descriptor.accepts_null() => FieldValue::Null,
                None => {
                    return Err(AppError::MissingResponseField {
                        field: descriptor.name.to_string(),
                    });
                }
            };
            staged.push((index, value));
        }
        Ok(staged)
    }
}

fn coerce_field(descriptor: &FieldDescriptor, raw: Value) -> Result<FieldValue, AppError> {
    if raw.is_null() {
        return if descriptor.accepts_null() {
            Ok(FieldValue::Null)
        } else {
            Err(AppError::TypeMismatch {
                field: descriptor.name.to_string(),
                expected: descriptor.field_type.to_string(),
                found: "null".to_string(),
            })
        };
    }
    FieldValue::coerce(&descriptor.field_type, raw, descriptor.name)
}

impl<M: ModelDefinition> Clone for ModelBase<M> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry,
            values: self.values.clone(),
            state: self.state,
            has_result: self.has_result,
            _definition: PhantomData,
        }
    }
}

impl<M: ModelDefinition> fmt::Debug for ModelBase<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self
            .registry
            .iter()
            .zip(&self.values)
            .map(|(d, v)| (d.name, v))
            .collect();
        f.debug_struct(M::NAME)
            .field("state", &self.state)
            .field("values", &values)
            .finish()
    }
}
