//! HTTP probe with response-to-exit-code mapping
//!
//! Issues a single HTTP request, classifies the response status code
//! against a user-supplied mapping specification, and turns it into a
//! process exit code plus an optional message rendered from the JSON
//! response body via path-expression templates.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod mapping;
pub mod path;
pub mod probe;
pub mod render;
pub mod template;

// Re-export main types
pub use dispatch::{Disposition, dispatch};
pub use error::{Error, Result};
pub use http::ResponseParts;
pub use mapping::{MappingRule, MappingTable, Selector};
pub use probe::{complete, run};
pub use render::Completion;
pub use template::Template;
