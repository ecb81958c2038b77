pub mod parser;

pub use parser::diagnostics::render_snippet;
pub use parser::{FirstError, ParseError, Parsed, Parser, SyntaxError};


// Integration tests are in the tests/ directory
