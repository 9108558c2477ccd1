//! Node evaluator.
//!
//! Walks the parsed node list with an explicit scope: the top-level context
//! plus a stack of loop bindings, innermost last.
//!
//! Variable resolution follows two rules:
//! - `{{ name }}` resolves against the top-level context only, and only when
//!   the entry is a scalar. The value is inserted as-is.
//! - `{{ item.field }}` resolves against the innermost loop binding named
//!   `item`. The value is HTML-escaped when truthy and empty otherwise, and
//!   may carry an `|upper` or `|length` filter.
//!
//! Anything that does not resolve is emitted exactly as written.

use super::lexer::Filter;
use super::parser::{Node, Variable};
use super::value::{Context, Value, escape_html};

struct Scope<'t, 'c> {
    globals: &'c Context,
    bindings: Vec<(&'t str, &'c Value)>,
}

impl<'t, 'c> Scope<'t, 'c> {
    fn new(globals: &'c Context) -> Self {
        Self { globals, bindings: Vec::new() }
    }

    fn binding(&self, name: &str) -> Option<&'c Value> {
        self.bindings.iter().rev().find(|(bound, _)| *bound == name).map(|(_, value)| *value)
    }

    /// Walk a dotted path: loop bindings shadow globals for the first
    /// segment, later segments are mapping lookups.
    fn resolve(&self, path: &[String]) -> Option<&'c Value> {
        let (first, rest) = path.split_first()?;
        let root = self.binding(first).or_else(|| self.globals.get(first))?;
        walk(root, rest)
    }
}

fn walk<'c>(mut value: &'c Value, segments: &[String]) -> Option<&'c Value> {
    for segment in segments {
        value = value.as_map()?.get(segment)?;
    }
    Some(value)
}

/// Render nodes against a context
pub fn render_nodes(nodes: &[Node], context: &Context) -> String {
    let mut out = String::new();
    let mut scope = Scope::new(context);
    render_into(nodes, &mut scope, &mut out);
    out
}

fn render_into<'t, 'c>(nodes: &'t [Node], scope: &mut Scope<'t, 'c>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable(var) => render_variable(var, scope, out),
            Node::Loop { item, list, body } => {
                // Anything other than a sequence iterates zero times
                let Some(elements) = scope.resolve(list).and_then(Value::as_list) else {
                    continue;
                };
                for element in elements {
                    scope.bindings.push((item.as_str(), element));
                    render_into(body, scope, out);
                    scope.bindings.pop();
                }
            }
            Node::Conditional { path, body } => {
                if scope.resolve(path).is_some_and(Value::is_truthy) {
                    render_into(body, scope, out);
                }
            }
        }
    }
}

fn render_variable(var: &Variable, scope: &Scope<'_, '_>, out: &mut String) {
    let rendered = match var.path.as_slice() {
        [name] => match (scope.globals.get(name), var.filter) {
            (Some(value), None) if value.is_scalar() => Some(value.to_string()),
            _ => None,
        },
        [item, fields @ ..] => scope
            .binding(item)
            .and_then(|bound| walk(bound, fields))
            .and_then(|value| item_field(value, var.filter)),
        [] => None,
    };

    match rendered {
        Some(text) => out.push_str(&text),
        None => out.push_str(&var.raw),
    }
}

fn item_field(value: &Value, filter: Option<Filter>) -> Option<String> {
    match filter {
        Some(Filter::Length) => Some(value.length().unwrap_or(0).to_string()),
        _ if !value.is_scalar() => None,
        None => Some(escaped(value)),
        Some(Filter::Upper) => Some(escaped(value).to_uppercase()),
    }
}

fn escaped(value: &Value) -> String {
    if value.is_truthy() { escape_html(&value.to_string()) } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::value::context_from_json;
    use crate::template::{lexer, parser};
    use serde_json::json;

    fn render(source: &str, context: serde_json::Value) -> String {
        let nodes = parser::parse(&lexer::tokenize(source));
        render_nodes(&nodes, &context_from_json(context))
    }

    #[test]
    fn test_top_level_scalars_are_not_escaped() {
        assert_eq!(render("<b>{{ html }}</b>", json!({"html": "<i>x</i>"})), "<b><i>x</i></b>");
    }

    #[test]
    fn test_top_level_collections_are_left_verbatim() {
        let ctx = json!({"list": [1, 2], "map": {"a": 1}});
        assert_eq!(render("{{ list }} {{ map }} {{ map.a }}", ctx), "{{ list }} {{ map }} {{ map.a }}");
    }

    #[test]
    fn test_unknown_variable_is_left_verbatim() {
        assert_eq!(render("x{{ missing }}y", json!({})), "x{{ missing }}y");
    }

    #[test]
    fn test_filter_on_top_level_variable_is_left_verbatim() {
        assert_eq!(render("{{ name|upper }}", json!({"name": "a"})), "{{ name|upper }}");
    }

    #[test]
    fn test_item_field_filters() {
        let ctx = json!({"items": [{"s": "fail<", "n": 3, "l": [1, 2, 3]}]});
        let out = render(
            "{% for i in items %}{{ i.s|upper }} {{ i.s|length }} {{ i.n|length }} {{ i.l|length }}{% endfor %}",
            ctx,
        );
        assert_eq!(out, "FAIL&LT; 5 0 3");
    }

    #[test]
    fn test_falsy_item_fields_render_empty() {
        let ctx = json!({"items": [{"zero": 0, "empty": "", "time": 0.0, "none": null}]});
        let out = render(
            "{% for i in items %}[{{ i.zero }}][{{ i.empty }}][{{ i.time }}][{{ i.none|upper }}]{% endfor %}",
            ctx,
        );
        assert_eq!(out, "[][][][]");
    }

    #[test]
    fn test_missing_item_field_is_left_verbatim() {
        let out = render("{% for i in items %}{{ i.nope }}{% endfor %}", json!({"items": [{"a": 1}]}));
        assert_eq!(out, "{{ i.nope }}");
    }

    #[test]
    fn test_item_without_fields_is_left_verbatim() {
        let out = render("{% for n in names %}{{ n }},{% endfor %}", json!({"names": ["a", "b"]}));
        assert_eq!(out, "{{ n }},{{ n }},");
    }

    #[test]
    fn test_inner_binding_shadows_outer() {
        let ctx = json!({"outer": [{"name": "o", "inner": [{"name": "i"}]}]});
        let out = render(
            "{% for x in outer %}{{ x.name }}{% for x in x.inner %}{{ x.name }}{% endfor %}{{ x.name }}{% endfor %}",
            ctx,
        );
        assert_eq!(out, "oio");
    }

    #[test]
    fn test_outer_binding_visible_in_inner_loop() {
        let ctx = json!({"suites": [{"name": "S", "cases": [{"name": "a"}, {"name": "b"}]}]});
        let out = render(
            "{% for s in suites %}{% for c in s.cases %}{{ s.name }}.{{ c.name }} {% endfor %}{% endfor %}",
            ctx,
        );
        assert_eq!(out, "S.a S.b ");
    }

    #[test]
    fn test_loop_over_non_sequence_yields_nothing() {
        let ctx = json!({"scalar": 5, "map": {"a": 1}});
        assert_eq!(render("[{% for x in scalar %}x{% endfor %}]", ctx.clone()), "[]");
        assert_eq!(render("[{% for x in map %}x{% endfor %}]", ctx.clone()), "[]");
        assert_eq!(render("[{% for x in missing %}x{% endfor %}]", ctx), "[]");
    }

    #[test]
    fn test_conditional_walks_mappings_only() {
        let ctx = json!({"a": {"b": {"c": "yes"}}, "list": [{"x": 1}]});
        assert_eq!(render("{% if a.b.c %}T{% endif %}", ctx.clone()), "T");
        assert_eq!(render("{% if a.b.missing %}T{% endif %}", ctx.clone()), "");
        assert_eq!(render("{% if a.b.c.d %}T{% endif %}", ctx.clone()), "");
        assert_eq!(render("{% if list.x %}T{% endif %}", ctx), "");
    }
}
