//! Key bindings and matching.
//!
//! A [`Binding`] names one table action and the key names that trigger it.
//! Matching is done on the `Display` form of a [`KeyMsg`](crate::KeyMsg), so
//! bindings can be written and rebound as plain strings.
//!
//! ```rust
//! use scroll_table::binding::{Binding, matches};
//!
//! let up = Binding::new().keys(["up", "k"]).help("↑/k", "move up");
//! assert!(matches("k", &[&up]));
//! assert!(!matches("j", &[&up]));
//! ```

use std::fmt;

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) as shown to the user (e.g. "↑/k").
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

impl Help {
    /// Creates new help information.
    #[must_use]
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// A keybinding with associated help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_keys(keys);
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help::new(key, desc);
        self
    }

    /// Creates a disabled binding.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Replaces the keys for this binding.
    pub fn set_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled if it's not disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Removes the keys and help from this binding.
    pub fn unbind(&mut self) {
        self.keys.clear();
        self.help = Help::default();
    }

    fn has_key(&self, key: &str) -> bool {
        self.enabled() && self.keys.iter().any(|k| k == key)
    }
}

/// Checks if the given key matches any of the given bindings.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key = key.to_string();
    bindings.iter().any(|binding| binding.has_key(&key))
}

/// Checks if the given key matches a single binding.
pub fn matches_one<K: fmt::Display>(key: K, binding: &Binding) -> bool {
    binding.has_key(&key.to_string())
}
