/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::{
    Endpoint, FieldDescriptor, FieldRegistry, FieldType, FieldValue, ModelBase, ModelDefinition,
};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

/// Payment address information of a payment owner
///
/// Endpoint `Wl/Pay/Address/Address.json`.
///
/// # Inputs
/// * `id_pay_owner` - payment owner type, one of the `WlPayOwnerSid` values
/// * `k_business` - business the payment is performed in, `null` if the
///   owner is not a user
/// * `k_id` - key of the payment owner; a business or a user depending on
///   `id_pay_owner`. `"0"` is a regular key here, not an "unset" marker
///
/// # Outputs
/// * `a_pay_address` - address record of the payee; an empty record arrives
///   as `[]` and decodes to an empty map
#[derive(Debug, Clone, Copy)]
pub struct Address;

impl ModelDefinition for Address {
    const NAME: &'static str = "AddressModel";

    fn endpoint() -> Endpoint {
        Endpoint::get("Wl/Pay/Address/Address.json")
    }

    fn registry() -> Result<&'static FieldRegistry, AppError> {
        static REGISTRY: OnceCell<FieldRegistry> = OnceCell::new();
        REGISTRY.get_or_try_init(|| {
            let mut registry = FieldRegistry::new(Self::NAME);
            registry
                .register(FieldDescriptor::input("id_pay_owner", FieldType::Integer))?
                .register(FieldDescriptor::input("k_business", FieldType::String).nullable())?
                .register(FieldDescriptor::input("k_id", FieldType::String))?
                .register(FieldDescriptor::output(
                    "a_pay_address",
                    FieldType::map(FieldType::Json),
                ))?;
            Ok(registry)
        })
    }
}

/// Payment address lookup model
pub type AddressModel = ModelBase<Address>;

impl ModelBase<Address> {
    /// Sets the payment owner in one call
    ///
    /// # Errors
    /// Propagates errors of [`ModelBase::set`]
    pub fn for_owner(
        &mut self,
        id_pay_owner: i64,
        k_business: Option<&str>,
        k_id: &str,
    ) -> Result<&mut Self, AppError> {
        self.set("id_pay_owner", id_pay_owner)?
            .set("k_business", k_business)?
            .set("k_id", k_id)
    }

    /// Address record of the last successful execution
    ///
    /// # Errors
    /// `FieldNotYetAvailable` before a successful execution
    pub fn pay_address(&self) -> Result<&BTreeMap<String, FieldValue>, AppError> {
        match self.get("a_pay_address")? {
            FieldValue::Map(address) => Ok(address),
            other => Err(AppError::TypeMismatch {
                field: "a_pay_address".to_string(),
                expected: FieldType::map(FieldType::Json).to_string(),
                found: format!("{other:?}"),
            }),
        }
    }
}
