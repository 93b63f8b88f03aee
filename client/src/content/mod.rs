//! Static content tables and the provider boundary that resolves them.
//!
//! DESIGN
//! ======
//! Screens never own the data they render. Record shapes live in `records`,
//! the literal tables in `fixtures`, and `provider` defines the seam a real
//! backend would implement. Everything is read-only for the life of the
//! loaded screen.

pub mod fixtures;
pub mod provider;
pub mod records;
