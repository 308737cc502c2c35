//! URL input handling for lookups.
//!
//! A lookup only goes out for input that trims to a well-formed absolute URL;
//! everything else is rejected here, before any network use.

mod host;
mod validate;

pub use host::host_label;
pub use validate::{validate_lookup_url, InvalidUrl};
