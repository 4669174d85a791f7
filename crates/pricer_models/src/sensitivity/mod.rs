//! Sensitivity analysis by varying one contract field.
//!
//! A [`Sweep`] reprices a base contract at each value of a [`SweepField`],
//! producing price and Greeks per point. Invalid points are reported
//! per point; callers choose between propagating the first error
//! ([`Sweep::collect_points`]) and dropping failures ([`Sweep::skip_invalid`]).

mod field;
mod sweep;

pub use field::{ParseSweepFieldError, SweepField};
pub use sweep::{sweep, Sweep, SweepPoint};
