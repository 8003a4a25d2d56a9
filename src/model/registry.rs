/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::field::FieldDescriptor;
use crate::model::value::FieldValue;
use std::collections::HashMap;
use tracing::debug;

/// Ordered table of the field descriptors of one model type
///
/// Built once per model and shared read-only by every instance. Iteration
/// always follows declaration order, so request parameters come out in a
/// reproducible order.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    model: &'static str,
    fields: Vec<FieldDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl FieldRegistry {
    /// Creates an empty registry for `model`
    #[must_use]
    pub fn new(model: &'static str) -> Self {
        Self {
            model,
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Name of the model this registry describes
    #[must_use]
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Adds a field
    ///
    /// # Errors
    /// * `DuplicateField` if the name is already registered
    /// * `TypeMismatch` if the default does not conform to the declared type
    pub fn register(&mut self, mut descriptor: FieldDescriptor) -> Result<&mut Self, AppError> {
        if self.index.contains_key(descriptor.name) {
            return Err(AppError::DuplicateField {
                model: self.model,
                field: descriptor.name.to_string(),
            });
        }

        descriptor.default = match descriptor.default.take() {
            Some(FieldValue::Null) if descriptor.accepts_null() => Some(FieldValue::Null),
            Some(default) => Some(FieldValue::coerce(
                &descriptor.field_type,
                default.to_json(),
                descriptor.name,
            )?),
            None => None,
        };

        debug!(
            "Registering {}.{} ({:?}, {})",
            self.model, descriptor.name, descriptor.direction, descriptor.field_type
        );
        self.index.insert(descriptor.name, self.fields.len());
        self.fields.push(descriptor);
        Ok(self)
    }

    /// Looks up a field by name
    ///
    /// # Errors
    /// `UnknownField` if no such field is declared
    pub fn describe(&self, name: &str) -> Result<&FieldDescriptor, AppError> {
        self.lookup(name).map(|(_, descriptor)| descriptor)
    }

    /// Position in declaration order and descriptor of a field
    pub(crate) fn lookup(&self, name: &str) -> Result<(usize, &FieldDescriptor), AppError> {
        match self.index.get(name) {
            Some(&i) => Ok((i, &self.fields[i])),
            None => Err(AppError::UnknownField {
                model: self.model,
                field: name.to_string(),
            }),
        }
    }

    /// Fields sent with the request, in declaration order
    pub fn inputs(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|d| d.direction.is_input())
    }

    /// Fields read from the response, in declaration order
    pub fn outputs(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|d| d.direction.is_output())
    }

    /// All fields, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Number of declared fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
