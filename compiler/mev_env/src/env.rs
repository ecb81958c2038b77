// Variable bindings and function table for one parse.
// Nothing here is global: each parser owns its own tables.

use mev_ast::{NativeFunction, Node};
use std::collections::HashMap;

use crate::builtins;

/// Variable name → value. Values are copied into the tree at parse time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any previous value.
    pub fn set<S: Into<String>>(&mut self, name: S, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (name, value) in iter {
            bindings.set(name, value);
        }
        bindings
    }
}

/// Function name → native callback.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, NativeFunction>,
}

impl FunctionTable {
    /// An empty table, without the built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-populated with `min`, `max`, `floor` and `round`.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.insert("min", builtins::min);
        table.insert("max", builtins::max);
        table.insert("floor", builtins::floor);
        table.insert("round", builtins::round);
        table
    }

    /// Registers `callback` under `name`, shadowing any existing entry.
    pub fn insert<S, F>(&mut self, name: S, callback: F)
    where
        S: Into<String>,
        F: Fn(&[Node]) -> f64 + Send + Sync + 'static,
    {
        self.insert_native(name, NativeFunction::new(callback));
    }

    /// Registers an existing handle, so several tables can share one callback.
    pub fn insert_native<S: Into<String>>(&mut self, name: S, function: NativeFunction) {
        let name = name.into();
        if self.functions.insert(name.clone(), function).is_some() {
            log::debug!("function '{name}' overridden");
        }
    }

    pub fn get(&self, name: &str) -> Option<NativeFunction> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
