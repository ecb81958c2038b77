//! Name tables consulted by the mev parser: variable bindings and native
//! functions, including the built-in prelude.

pub mod builtins;
pub mod env;

pub use env::{Bindings, FunctionTable};
