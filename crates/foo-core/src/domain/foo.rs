//! The `Foo` record.

use std::fmt;

use tracing::debug;

use super::age;
use crate::config::FooOptions;
use crate::error::FooError;

/// A validated name/age pair.
///
/// # Invariants
/// - `name` is non-empty
/// - `age` is in `1..=120`
///
/// Fields are private so the invariants cannot be broken after
/// construction. The record owns its name; dropping it releases everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foo {
    name: String,
    age: u8,
}

impl Foo {
    /// Build a record with default (permissive) options.
    ///
    /// `None` and `""` are both treated as absent.
    pub fn new(name: Option<&str>, age: Option<&str>) -> Result<Self, FooError> {
        Self::with_options(name, age, &FooOptions::default())
    }

    /// Build a record.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// name, age text, parse, hard limit, soft limit, allocation.
    pub fn with_options(
        name: Option<&str>,
        age: Option<&str>,
        opts: &FooOptions,
    ) -> Result<Self, FooError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(FooError::MissingName)?;
        let age_text = age.filter(|a| !a.is_empty()).ok_or(FooError::MissingAge)?;

        let parsed = age::parse(age_text, opts.age_parse)?;
        debug!(age_text, parsed, mode = ?opts.age_parse, "parsed age");

        let age = age::check_limits(parsed).inspect_err(|e| {
            debug!(parsed, kind = ?e.kind(), "age rejected");
        })?;

        let name = copy_name(name)?;

        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

impl fmt::Display for Foo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Foo: name: '{}', age: {}", self.name, self.age)
    }
}

// Reserve first so an exhausted allocator surfaces as an error, not an abort.
fn copy_name(name: &str) -> Result<String, FooError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(name.len())
        .map_err(|_| FooError::AllocationFailure)?;
    owned.push_str(name);
    Ok(owned)
}
