//! Minimal template engine for HTML reports.
//!
//! Supports three directive kinds:
//! - `{{ name }}` and `{{ item.field }}` (with optional `|upper` / `|length`)
//! - `{% for item in list %}` ... `{% endfor %}`
//! - `{% if path %}` ... `{% endif %}`
//!
//! Matching is purely lexical. There is no escape syntax for literal
//! directive text, and markup that does not form a complete directive is
//! copied to the output unchanged instead of raising an error.
//!
//! # Module Organization
//!
//! - `lexer` - Source to tokens, single forward pass
//! - `parser` - Tokens to a node tree, depth-aware block matching
//! - `render` - Node tree plus context to output text
//! - `value` - Context values, stringification and truthiness

mod lexer;
mod parser;
mod render;
mod value;

pub use value::{Context, Value, context_from_json};

/// A parsed template, reusable across any number of contexts
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<parser::Node>,
}

impl Template {
    /// Parse template source. Parsing never fails.
    pub fn parse(source: &str) -> Self {
        let tokens = lexer::tokenize(source);
        Self { nodes: parser::parse(&tokens) }
    }

    /// Render against a context. Pure: the same context gives the same output.
    pub fn render(&self, context: &Context) -> String {
        render::render_nodes(&self.nodes, context)
    }
}
