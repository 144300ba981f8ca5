//! Canonical registry of HTTP header field names.
//!
//! ```
//! use zz_headers::{ Category, headers::names::cors, registry };
//!
//! let origin = registry::lookup("Origin").unwrap();
//! assert_eq!(origin.wire_name, cors::ORIGIN);
//! assert_eq!(origin.category, Category::Cors);
//! assert!(!registry::is_known("x-not-a-real-header"));
//! ```
pub mod consts;
pub mod error;
pub mod headers;
pub mod registry;

pub use error::{ Error, Result };
pub use headers::{ Category, HeaderDescriptor };
pub use registry::{ DuplicatePolicy, Registry, RegistryBuilder };
