//! Sale price and margin recommendations for small catalogs.
//!
//! [`domain`] holds the calculation engine, [`infra`] the report export and
//! [`util`] persistence, logging and embedded assets for the desktop shell.

pub mod domain;
pub mod infra;
pub mod util;
