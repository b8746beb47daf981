pub mod gateway_error;
pub mod language;

pub use gateway_error::GatewayError;
pub use language::{language_name, LanguageCode};
