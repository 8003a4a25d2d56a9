/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{BOOK_MODE_APP_FRONTEND, MYSQL_DATETIME_FORMAT};
use crate::error::AppError;
use crate::model::{
    DecimalString, Endpoint, FieldDescriptor, FieldRegistry, FieldType, ModelBase,
    ModelDefinition,
};
use crate::presentation::serialization::{bool_or_flag_opt, int_or_string, int_or_string_opt};
use chrono::NaiveDateTime;
use once_cell::sync::OnceCell;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Purchase Options that can book the specified session(s)
///
/// Endpoint `Wl/Book/Process/Purchase/Purchase.json`.
///
/// # Inputs
/// * `k_business` - business key, `null` if not set yet
/// * `k_class_period` - key of the session being booked, `null` if not set yet
/// * `dt_date_gmt` - date/time of the session in MySQL format and GMT,
///   `null` if not set yet
/// * `uid` - user making the booking, `null` if not set yet
/// * `id_mode` - booking mode, one of the `WlBookModeSid` values; defaults to
///   the client application mode
///
/// # Outputs
/// * `a_purchase` - map from a unique string ID to a Purchase Option record,
///   see [`PurchaseOption`] for the record layout; `null` when none
/// * `a_session` - map from session key to the list of date/times the
///   session occurs at
#[derive(Debug, Clone, Copy)]
pub struct Purchase;

impl ModelDefinition for Purchase {
    const NAME: &'static str = "PurchaseModel";

    fn endpoint() -> Endpoint {
        Endpoint::get("Wl/Book/Process/Purchase/Purchase.json")
    }

    fn registry() -> Result<&'static FieldRegistry, AppError> {
        static REGISTRY: OnceCell<FieldRegistry> = OnceCell::new();
        REGISTRY.get_or_try_init(|| {
            let mut registry = FieldRegistry::new(Self::NAME);
            registry
                .register(FieldDescriptor::input("k_business", FieldType::String).nullable())?
                .register(FieldDescriptor::input("k_class_period", FieldType::String).nullable())?
                .register(FieldDescriptor::input("dt_date_gmt", FieldType::String).nullable())?
                .register(FieldDescriptor::input("uid", FieldType::String).nullable())?
                .register(
                    FieldDescriptor::input("id_mode", FieldType::Integer)
                        .with_default(BOOK_MODE_APP_FRONTEND),
                )?
                .register(
                    FieldDescriptor::output("a_purchase", FieldType::map(FieldType::Json))
                        .nullable(),
                )?
                .register(
                    FieldDescriptor::output(
                        "a_session",
                        FieldType::map(FieldType::list(FieldType::String)),
                    )
                    .nullable(),
                )?;
            Ok(registry)
        })
    }
}

/// Purchase Option listing model
pub type PurchaseModel = ModelBase<Purchase>;

impl ModelBase<Purchase> {
    /// Sets the session being booked in one call
    ///
    /// # Errors
    /// Propagates errors of [`ModelBase::set`]
    pub fn with_session(
        &mut self,
        k_business: &str,
        k_class_period: &str,
        date_gmt: NaiveDateTime,
        uid: &str,
    ) -> Result<&mut Self, AppError> {
        self.set("k_business", k_business)?
            .set("k_class_period", k_class_period)?
            .set(
                "dt_date_gmt",
                date_gmt.format(MYSQL_DATETIME_FORMAT).to_string(),
            )?
            .set("uid", uid)
    }

    /// Typed view of `a_purchase`, `None` when the server sent `null`
    ///
    /// # Errors
    /// * errors of [`ModelBase::get`]
    /// * `Json` if a record does not match [`PurchaseOption`]
    pub fn purchase_options(&self) -> Result<Option<BTreeMap<String, PurchaseOption>>, AppError> {
        self.get_as("a_purchase")
    }

    /// `a_session` with its date strings parsed
    ///
    /// # Errors
    /// * errors of [`ModelBase::get`]
    /// * `TypeMismatch` if a date is not in MySQL format
    pub fn session_dates(&self) -> Result<BTreeMap<String, Vec<NaiveDateTime>>, AppError> {
        let Some(sessions) = self.get("a_session")?.as_map() else {
            return Ok(BTreeMap::new());
        };

        let mut parsed = BTreeMap::new();
        for (k_class_period, dates) in sessions {
            let dates = dates
                .as_list()
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(i, date)| {
                    let raw = date.as_str().unwrap_or_default();
                    NaiveDateTime::parse_from_str(raw, MYSQL_DATETIME_FORMAT).map_err(|_| {
                        AppError::TypeMismatch {
                            field: format!("a_session.{k_class_period}[{i}]"),
                            expected: "datetime".to_string(),
                            found: format!("string {raw:?}"),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            parsed.insert(k_class_period.clone(), dates);
        }
        Ok(parsed)
    }
}

/// One Purchase Option of `a_purchase`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PurchaseOption {
    /// Installment plans
    #[serde(default)]
    pub a_installment_template: Vec<InstallmentTemplate>,
    /// Promotions only: limits on booking by the promotion
    #[serde(default)]
    pub a_visit_limit: Option<Vec<VisitLimit>>,
    /// Price
    pub f_price: DecimalString,
    /// Price for early bookings
    #[serde(default)]
    pub f_price_early: Option<DecimalString>,
    /// Description, ready to paste in a browser
    #[serde(default)]
    pub html_description: String,
    /// Number of sessions the Purchase Option can book
    #[serde(default, deserialize_with = "int_or_string_opt")]
    pub i_limit: Option<i64>,
    /// Membership promotions only: duration of the regular payment interval
    #[serde(default, deserialize_with = "int_or_string_opt")]
    pub i_payment_period: Option<i64>,
    /// Single-session purchases only: sessions booked simultaneously
    #[serde(default, deserialize_with = "int_or_string_opt")]
    pub i_session: Option<i64>,
    /// Promotions only: `RsProgramCategorySid` value
    #[serde(default, deserialize_with = "int_or_string_opt")]
    pub id_program_category: Option<i64>,
    /// Promotions only: `RsProgramTypeSid` value
    #[serde(default, deserialize_with = "int_or_string_opt")]
    pub id_program_type: Option<i64>,
    /// Purchase Option type, `RsPurchaseItemSid` value
    #[serde(deserialize_with = "int_or_string")]
    pub id_purchase_item: i64,
    /// Requires a contract assignment
    #[serde(default, deserialize_with = "bool_or_flag_opt")]
    pub is_contract: Option<bool>,
    /// Converted to another instance after expiration
    #[serde(default, deserialize_with = "bool_or_flag_opt")]
    pub is_convert: Option<bool>,
    /// Renewable
    #[serde(default, deserialize_with = "bool_or_flag_opt")]
    pub is_renew: Option<bool>,
    /// Renewable with "auto-renew" on by default
    #[serde(default, deserialize_with = "bool_or_flag_opt")]
    pub is_renew_check: Option<bool>,
    /// Key of the Purchase Option; the table depends on `id_purchase_item`
    pub k_id: String,
    /// Prize of the user usable instead of a Purchase Option
    #[serde(default)]
    pub k_login_prize: Option<String>,
    /// Contract text, only set when `is_contract` is `true`
    #[serde(default)]
    pub s_contract: Option<String>,
    /// Membership promotions only: unit of `i_payment_period`
    #[serde(default)]
    pub s_payment_duration: Option<String>,
    /// Title of the promotion converted to after expiration
    #[serde(default)]
    pub s_promotion_convert: Option<String>,
    /// Title
    pub s_title: String,
    /// Unique identifier
    pub s_value: String,
}

/// Installment plan of a Purchase Option
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct InstallmentTemplate {
    /// Number of payments
    #[serde(deserialize_with = "int_or_string")]
    pub i_count: i64,
    /// Duration of a single period
    #[serde(deserialize_with = "int_or_string")]
    pub id_duration: i64,
    /// Number of periods between payments
    #[serde(deserialize_with = "int_or_string")]
    pub i_period: i64,
    /// Payment currency key
    pub k_currency: String,
    /// Installment plan template key
    pub k_pay_installment_template: String,
    /// Amount of the installment plan
    pub m_amount: DecimalString,
    /// Title of the installment plan
    pub s_duration: String,
}

/// Booking limit of a promotion
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct VisitLimit {
    /// Description of the limit
    pub s_title: String,
}
