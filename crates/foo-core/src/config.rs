//! Construction options.
//!
//! Nothing is read from files or the environment; the CLI maps its flags
//! onto these structs.

/// How age text is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeParse {
    /// C `atoi` semantics: leading numeric prefix, anything else is 0.
    #[default]
    Permissive,

    /// The whole text must be an integer, otherwise `FooError::ParseAge`.
    Strict,
}

/// Options for [`Foo::with_options`](crate::Foo::with_options).
#[derive(Debug, Clone, Default)]
pub struct FooOptions {
    pub age_parse: AgeParse,
}

impl FooOptions {
    /// Preset that rejects malformed age text instead of coercing it to 0.
    pub fn strict() -> Self {
        Self {
            age_parse: AgeParse::Strict,
        }
    }
}
