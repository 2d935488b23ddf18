//! foo-core
//!
//! Validated construction of a [`Foo`] record (a name and an age).
//!
//! # Modules
//! - **domain**: the record itself and the age parsing / limit rules
//! - **config**: construction options (`FooOptions`, `AgeParse`)
//! - **error**: `FooError` and its field-less `ErrorKind`

pub mod config;
pub mod domain;
pub mod error;

pub use config::{AgeParse, FooOptions};
pub use domain::Foo;
pub use error::{ErrorKind, FooError};
