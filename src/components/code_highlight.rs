use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Rust keywords that should be highlighted
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while",
];

/// Common types and variants worth distinguishing from plain identifiers
const RUST_TYPES: &[&str] = &[
    "bool", "char", "i32", "i64", "u16", "u32", "u64", "usize", "f64", "str", "String", "Vec",
    "VecDeque", "Option", "Some", "None", "Result", "Ok", "Err", "Box", "HashSet", "HashMap",
];

/// Token types for Rust syntax
#[derive(Debug, PartialEq, Clone)]
enum Token {
    Keyword(String),
    Type(String),
    String(String),
    Number(String),
    Comment(String),
    Identifier(String),
    Whitespace(String),
    Punctuation(String),
}

/// Simple Rust tokenizer
fn tokenize(code: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = code.chars().peekable();
    let mut current = String::new();

    while let Some(&ch) = chars.peek() {
        match ch {
            // String literals
            '"' => {
                if !current.is_empty() {
                    tokens.push(classify_word(&current));
                    current.clear();
                }
                current.push(chars.next().unwrap());
                while let Some(&ch) = chars.peek() {
                    current.push(chars.next().unwrap());
                    if ch == '"' {
                        break;
                    }
                }
                tokens.push(Token::String(current.clone()));
                current.clear();
            }
            // Line comments
            '/' if chars.clone().nth(1) == Some('/') => {
                if !current.is_empty() {
                    tokens.push(classify_word(&current));
                    current.clear();
                }
                while let Some(&ch) = chars.peek() {
                    current.push(chars.next().unwrap());
                    if ch == '\n' {
                        break;
                    }
                }
                tokens.push(Token::Comment(current.clone()));
                current.clear();
            }
            // Whitespace
            ' ' | '\t' | '\n' | '\r' => {
                if !current.is_empty() {
                    tokens.push(classify_word(&current));
                    current.clear();
                }
                current.push(chars.next().unwrap());
                while let Some(&ch) = chars.peek() {
                    if ch == ' ' || ch == '\t' || ch == '\n' || ch == '\r' {
                        current.push(chars.next().unwrap());
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Whitespace(current.clone()));
                current.clear();
            }
            // Operators and punctuation
            '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | ':' | '.' | '*' | '=' | '<' | '>'
            | '+' | '-' | '/' | '%' | '&' | '|' | '!' | '?' => {
                if !current.is_empty() {
                    tokens.push(classify_word(&current));
                    current.clear();
                }
                current.push(chars.next().unwrap());
                tokens.push(Token::Punctuation(current.clone()));
                current.clear();
            }
            // Everything else (identifiers, numbers, keywords)
            _ => {
                current.push(chars.next().unwrap());
            }
        }
    }

    if !current.is_empty() {
        tokens.push(classify_word(&current));
    }

    tokens
}

/// Classify a word as keyword, type, number, or identifier
fn classify_word(word: &str) -> Token {
    if RUST_KEYWORDS.contains(&word) {
        Token::Keyword(word.to_string())
    } else if RUST_TYPES.contains(&word) {
        Token::Type(word.to_string())
    } else if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '_') {
        Token::Number(word.to_string())
    } else {
        Token::Identifier(word.to_string())
    }
}

/// Convert Rust source into highlighted ratatui Lines
pub fn highlight_rust(code: &str) -> Vec<Line<'static>> {
    let tokens = tokenize(code);
    let mut lines = Vec::new();
    let mut current_line_spans = Vec::new();

    for token in tokens {
        let (style, text) = match token {
            Token::Keyword(s) => (
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                s,
            ),
            Token::Type(s) => (Style::default().fg(Color::Yellow), s),
            Token::String(s) => (Style::default().fg(Color::Green), s),
            Token::Number(s) => (Style::default().fg(Color::Magenta), s),
            Token::Comment(s) => (Style::default().fg(Color::DarkGray), s),
            Token::Identifier(s) => (Style::default().fg(Color::White), s),
            Token::Whitespace(s) => (Style::default(), s),
            Token::Punctuation(s) => (Style::default().fg(Color::Gray), s),
        };

        // Split by newlines to create proper Lines
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(current_line_spans.clone()));
                current_line_spans.clear();
            }
            if !part.is_empty() {
                current_line_spans.push(Span::styled(part.to_string(), style));
            }
        }
    }

    if !current_line_spans.is_empty() {
        lines.push(Line::from(current_line_spans));
    }

    // If no lines were created, return at least one empty line
    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}
