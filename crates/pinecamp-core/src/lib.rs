//! Booking form domain for the Pinecamp site: snapshots of the inquiry
//! form, field validation, phone formatting and environment configuration.

pub mod app_config;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod phone;
pub mod snapshot;
pub mod validate;

pub use app_config::{AppConfig, Environment};
pub use config::{
    is_valid_store_key, load_app_config, load_app_config_from_env, DEFAULT_STORE_KEY,
};
pub use confirmation::Confirmation;
pub use error::ConfigError;
pub use phone::{canonical_phone, format_phone_input, phone_digits};
pub use snapshot::{is_reserved_field, FormSnapshot, RESERVED_FIELDS};
pub use validate::{validate, FieldError, FieldErrorKind, ValidationResult};
