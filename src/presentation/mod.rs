/// Payment address lookup model
pub mod pay_address;
/// Purchase Option listing model and its record views
pub mod purchase;
/// Serialization utilities for API responses
pub mod serialization;

pub use pay_address::{Address, AddressModel};
pub use purchase::{InstallmentTemplate, Purchase, PurchaseModel, PurchaseOption, VisitLimit};
