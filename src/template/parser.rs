//! Recursive-descent parser from tokens to a node tree.
//!
//! A block open is paired with the first close of the same kind that brings
//! the nesting depth back to zero. Only same-kind directives move the depth:
//! loops and conditionals are matched independently of each other. An open
//! without a matching close, and a close without an open, become literal text.

use super::lexer::{BlockKind, Filter, Token};

/// A `{{ ... }}` reference
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub raw: String,
    pub path: Vec<String>,
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Variable(Variable),
    Loop { item: String, list: Vec<String>, body: Vec<Node> },
    Conditional { path: Vec<String>, body: Vec<Node> },
}

/// Build the node list for a token sequence
pub fn parse(tokens: &[Token<'_>]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token.opens().is_some()
            && let Some(close) = find_matching_close(tokens, i)
        {
            let body = parse(&tokens[i + 1..close]);
            nodes.push(block_node(token, body));
            i = close + 1;
            continue;
        }

        match token {
            Token::Variable { raw, path, filter } => nodes.push(Node::Variable(Variable {
                raw: raw.to_string(),
                path: owned_path(path),
                filter: *filter,
            })),
            // Text, unmatched opens and stray closes all render as their source
            other => push_text(&mut nodes, other.raw()),
        }
        i += 1;
    }

    nodes
}

/// Index of the close that balances the open at `open`, if any
fn find_matching_close(tokens: &[Token<'_>], open: usize) -> Option<usize> {
    let kind: BlockKind = tokens[open].opens()?;
    let mut depth = 0usize;

    for (idx, token) in tokens.iter().enumerate().skip(open) {
        if token.opens() == Some(kind) {
            depth += 1;
        } else if token.closes() == Some(kind) {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }

    None
}

fn block_node(open: &Token<'_>, body: Vec<Node>) -> Node {
    match open {
        Token::ForOpen { item, list, .. } => Node::Loop { item: item.to_string(), list: owned_path(list), body },
        Token::IfOpen { path, .. } => Node::Conditional { path: owned_path(path), body },
        other => Node::Text(other.raw().to_string()),
    }
}

fn owned_path(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}

/// Append literal text, merging with a preceding text node
fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}
