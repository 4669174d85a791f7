//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`OptionType`]: Call/put dispatch enum
//! - [`OptionContract`]: Validated European option contract
//! - [`ContractParams`]: Unvalidated contract fields (deserialisation, CLI input)
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionType};
//!
//! let put = OptionContract::new(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put).unwrap();
//! assert_eq!(put.option_type().intrinsic(150.0, put.strike()), 50.0);
//! ```

mod contract;
mod error;
mod option_type;

pub use contract::{ContractParams, OptionContract};
pub use error::InstrumentError;
pub use option_type::{OptionType, ParseOptionTypeError};
