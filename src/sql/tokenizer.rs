use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient SQL tokenizer producing a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Designed for IDE autocomplete and cursor-aware fragment narrowing.
/// - Accepts incomplete / syntactically invalid SQL (e.g. `SELECT FROM`,
///   an unterminated string at the cursor).
/// - Classifies only the keyword set defined in `keyword.rs`; performs no
///   validation of SQL correctness.
///
/// Behavior:
/// - Skips ASCII whitespace, `--` line comments and `/* .. */` block
///   comments without emitting tokens for them.
/// - Aggregates `[A-Za-z0-9_$]` runs into identifiers, preserving original
///   case; lowercases once to attempt keyword classification.
/// - `'...'` string literals (with `''` escape) become opaque `Literal`
///   tokens; `"..."` quoted identifiers become opaque `Ident` tokens with
///   their quotes preserved. Neither is re-tokenized. An unterminated
///   literal or comment consumes to end of input.
/// - Emits `Terminator` for `;`, dedicated tokens for comma, dot and
///   parentheses; everything else is `Other(char)`.
///
/// Guarantees:
/// - Never panics on valid UTF-8 and bounded indices.
/// - Never returns an error (malformed constructs still yield tokens).
///
/// Complexity: O(n) time, O(t) space where `t` is the number of tokens.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = sql.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;

        // Skip whitespace quickly
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        // Line comment: -- to end of line
        if c == '-' && bytes.get(i + 1) == Some(&b'-') {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }

        // Block comment: /* .. */, unterminated runs to end of input
        if c == '/' && bytes.get(i + 1) == Some(&b'*') {
            i += 2;
            while i < bytes.len() {
                if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // String literal, '' escapes a quote
        if c == '\'' {
            i = scan_quoted(bytes, i, b'\'');
            out.push(Token::new(
                TokenKind::Literal(sql[start..i].to_string()),
                start,
                i,
            ));
            continue;
        }

        // Quoted identifier: opaque, quotes preserved, "" escapes a quote
        if c == '"' {
            i = scan_quoted(bytes, i, b'"');
            out.push(Token::new(
                TokenKind::Ident(sql[start..i].to_string()),
                start,
                i,
            ));
            continue;
        }

        // Identifier path
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            i += 1;
            while i < bytes.len() {
                let cc = bytes[i] as char;
                if cc.is_ascii_alphanumeric() || cc == '_' || cc == '$' {
                    i += 1;
                } else {
                    break;
                }
            }
            let text = &sql[start..i];
            let lower = text.to_ascii_lowercase();
            let kind = Keyword::from_lower(&lower)
                .map(TokenKind::Keyword)
                .unwrap_or_else(|| TokenKind::Ident(text.to_string()));
            out.push(Token::new(kind, start, i));
            continue;
        }

        // Single-character tokens
        i += 1;
        let kind = match c {
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            ';' => TokenKind::Terminator,
            other => TokenKind::Other(other),
        };
        out.push(Token::new(kind, start, i));
    }

    out
}

/// Advance past a quoted region starting at the opening quote `bytes[at]`.
/// A doubled quote escapes; an unterminated region consumes to end of input.
/// Returns the offset just past the closing quote.
fn scan_quoted(bytes: &[u8], at: usize, quote: u8) -> usize {
    let mut i = at + 1;
    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    i
}

/// Controlled-lookahead alias probe for the token after an object name.
///
/// Starting from the object-name token at `name_idx`, skips a single `AS`
/// keyword and returns the next token's text only if it is an identifier.
/// A clause keyword (`WHERE`, `SET`, `ON`, ...) is never taken as an alias;
/// in that case, or at end of input, the caller falls back to the implicit
/// alias (the object name itself).
pub fn alias_token<'a>(tokens: &'a [Token], name_idx: usize) -> Option<&'a str> {
    let mut j = name_idx + 1;
    if tokens.get(j).is_some_and(|t| t.is_keyword(Keyword::As)) {
        j += 1;
    }
    tokens.get(j).and_then(|t| t.ident())
}
