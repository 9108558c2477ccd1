//! Template tokenizer.
//!
//! Splits template source into literal text and directives in a single
//! forward pass. A `{{ ... }}` or `{% ... %}` whose content is not a
//! recognised directive is not a token: scanning resumes one byte after its
//! opening brace and the text stays literal.

const VAR_OPEN: &str = "{{";
const VAR_CLOSE: &str = "}}";
const TAG_OPEN: &str = "{%";
const TAG_CLOSE: &str = "%}";

/// Transform suffix on an item-field reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Upper,
    Length,
}

impl Filter {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "upper" => Some(Filter::Upper),
            "length" => Some(Filter::Length),
            _ => None,
        }
    }
}

/// Kind of block a directive opens or closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Loop,
    Conditional,
}

/// A lexical unit of a template; `raw` is always the exact source slice
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Text(&'a str),
    Variable { raw: &'a str, path: Vec<&'a str>, filter: Option<Filter> },
    ForOpen { raw: &'a str, item: &'a str, list: Vec<&'a str> },
    ForClose { raw: &'a str },
    IfOpen { raw: &'a str, path: Vec<&'a str> },
    IfClose { raw: &'a str },
}

impl<'a> Token<'a> {
    /// Source text of the token
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(raw)
            | Token::Variable { raw, .. }
            | Token::ForOpen { raw, .. }
            | Token::ForClose { raw }
            | Token::IfOpen { raw, .. }
            | Token::IfClose { raw } => *raw,
        }
    }

    pub fn opens(&self) -> Option<BlockKind> {
        match self {
            Token::ForOpen { .. } => Some(BlockKind::Loop),
            Token::IfOpen { .. } => Some(BlockKind::Conditional),
            _ => None,
        }
    }

    pub fn closes(&self) -> Option<BlockKind> {
        match self {
            Token::ForClose { .. } => Some(BlockKind::Loop),
            Token::IfClose { .. } => Some(BlockKind::Conditional),
            _ => None,
        }
    }
}

/// Tokenize template source. Never fails; unrecognised markup is text.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('{') {
        let start = pos + offset;
        let rest = &source[start..];

        let close = if rest.starts_with(VAR_OPEN) {
            VAR_CLOSE
        } else if rest.starts_with(TAG_OPEN) {
            TAG_CLOSE
        } else {
            pos = start + 1;
            continue;
        };

        let token = rest[2..].find(close).and_then(|len| {
            let raw = &rest[..2 + len + 2];
            let inner = rest[2..2 + len].trim();
            if close == VAR_CLOSE { classify_variable(raw, inner) } else { classify_tag(raw, inner) }
        });

        match token {
            Some(token) => {
                if literal_start < start {
                    tokens.push(Token::Text(&source[literal_start..start]));
                }
                pos = start + token.raw().len();
                literal_start = pos;
                tokens.push(token);
            }
            None => pos = start + 1,
        }
    }

    if literal_start < source.len() {
        tokens.push(Token::Text(&source[literal_start..]));
    }

    tokens
}

fn classify_variable<'a>(raw: &'a str, inner: &'a str) -> Option<Token<'a>> {
    let (expr, filter) = match inner.split_once('|') {
        Some((expr, filter)) => (expr.trim(), Some(Filter::parse(filter.trim())?)),
        None => (inner, None),
    };

    Some(Token::Variable { raw, path: dotted_path(expr)?, filter })
}

fn classify_tag<'a>(raw: &'a str, inner: &'a str) -> Option<Token<'a>> {
    let words: Vec<&str> = inner.split_whitespace().collect();

    match words.as_slice() {
        ["for", item, "in", list] if is_identifier(item) => {
            Some(Token::ForOpen { raw, item: *item, list: dotted_path(*list)? })
        }
        ["endfor"] => Some(Token::ForClose { raw }),
        ["if", path] => Some(Token::IfOpen { raw, path: dotted_path(*path)? }),
        ["endif"] => Some(Token::IfClose { raw }),
        _ => None,
    }
}

fn dotted_path(expr: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = expr.split('.').collect();
    segments.iter().all(|s| is_identifier(s)).then_some(segments)
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}
