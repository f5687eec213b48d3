//! Environment Port
//!
//! Key/value lookup used to resolve protected zone prefixes.

/// Looks up environment values by key.
///
/// An unset key yields `None`; implementations should also report empty
/// values as `None` so they can never act as a prefix of every path.
pub trait Environment {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
