//! Domain model: the `Foo` record and the age rules it is built with.

pub mod age;
pub mod foo;

pub use age::{AGE_HARD_LIMIT, AGE_MIN, AGE_SOFT_LIMIT};
pub use foo::Foo;
