//! Email addresses module.

mod errors;
mod parsed_address;
mod recipients;

pub use errors::EmailAddressError;
pub use parsed_address::{parse_one, ParsedAddress};
pub use recipients::{parse_many, Recipients};
