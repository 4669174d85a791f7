//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts and their closed-form Black-Scholes analytics.
//!
//! This crate provides:
//! - Validated contract definitions ([`instruments`])
//! - Price, d₁/d₂ and Greeks ([`analytical`])
//! - Payoff-at-maturity curves ([`payoff`])
//! - Single-parameter sensitivity sweeps ([`sensitivity`])
//!
//! ## Design Principles
//!
//! - **Validated at construction**: every `OptionContract` satisfies its domain
//! - **Enum dispatch** on call/put, no trait objects
//! - **Lazy sequences**: payoff curves and sweeps are borrowing iterators
//!
//! ## Example
//!
//! ```
//! use pricer_models::{greeks, price};
//! use pricer_models::instruments::{OptionContract, OptionType};
//!
//! let call = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let pricing = price(&call).unwrap();
//! let g = greeks(&call).unwrap();
//! assert!((pricing.price - 10.4506).abs() < 1e-4);
//! assert!((g.vega - 37.524).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod payoff;
pub mod sensitivity;

pub use analytical::{greeks, price, AnalyticalError, GreeksResult, PricingResult};
pub use payoff::{payoff_curve, PayoffCurve, PayoffPoint};
pub use sensitivity::{sweep, Sweep, SweepField, SweepPoint};
