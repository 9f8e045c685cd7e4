//! License string checks.
//!
//! Accepts `UNLICENSED`, `SEE LICENSE IN <file>`, or an SPDX expression built from
//! identifiers on the SPDX license list, `+`, `WITH <exception>`, `AND`, `OR` and parentheses.

use regex::Regex;
use std::sync::LazyLock;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Warning returned for any license string that is not recognized.
pub const INVALID_LICENSE_WARNING: &str =
    "license should be a valid SPDX license expression (without \"LicenseRef\"), \"UNLICENSED\", or \"SEE LICENSE IN <filename>\"";

const UNLICENSED: &[&str] = &["UNLICENSED", "UNLICENCED"];

static SEE_LICENSE_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SEE LICEN[CS]E IN (.+)$").expect("valid license file regex"));

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    And,
    Or,
    With,
    Id(&'a str),
}

/// Recursive descent over `expr := term (OR term)*`, `term := atom (AND atom)*`,
/// `atom := '(' expr ')' | license ['WITH' exception]`.
struct ExpressionParser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Checks a license string, returning warnings. An empty list means the license is
/// recognized.
pub fn check_license(license: &str) -> Vec<String> {
    if UNLICENSED.contains(&license)
        || SEE_LICENSE_IN.is_match(license)
        || is_spdx_expression(license)
    {
        Vec::new()
    } else {
        vec![INVALID_LICENSE_WARNING.to_string()]
    }
}

/// True if the string is a well-formed SPDX expression over known identifiers.
pub fn is_spdx_expression(expression: &str) -> bool {
    let Some(tokens) = tokenize(expression) else {
        return false;
    };
    if tokens.is_empty() {
        return false;
    }
    let mut parser = ExpressionParser { tokens, pos: 0 };
    parser.parse_expression() && parser.pos == parser.tokens.len()
}

fn tokenize(expression: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    for word in expression.split_whitespace() {
        let mut rest = word;
        while let Some(stripped) = rest.strip_prefix('(') {
            tokens.push(Token::Open);
            rest = stripped;
        }
        let mut closes = 0;
        while let Some(stripped) = rest.strip_suffix(')') {
            closes += 1;
            rest = stripped;
        }
        if !rest.is_empty() {
            tokens.push(match rest {
                "AND" => Token::And,
                "OR" => Token::Or,
                "WITH" => Token::With,
                id if id.contains(['(', ')']) => return None,
                id => Token::Id(id),
            });
        }
        tokens.extend(std::iter::repeat_n(Token::Close, closes));
    }
    Some(tokens)
}

fn is_license_id(id: &str) -> bool {
    let id = id.strip_suffix('+').unwrap_or(id);
    !id.is_empty() && spdx::license_id(id).is_some()
}

fn is_exception_id(id: &str) -> bool {
    spdx::exception_id(id).is_some()
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl<'a> ExpressionParser<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn parse_expression(&mut self) -> bool {
        if !self.parse_term() {
            return false;
        }
        while self.peek() == Some(Token::Or) {
            self.pos += 1;
            if !self.parse_term() {
                return false;
            }
        }
        true
    }

    fn parse_term(&mut self) -> bool {
        if !self.parse_atom() {
            return false;
        }
        while self.peek() == Some(Token::And) {
            self.pos += 1;
            if !self.parse_atom() {
                return false;
            }
        }
        true
    }

    fn parse_atom(&mut self) -> bool {
        match self.next() {
            Some(Token::Open) => self.parse_expression() && self.next() == Some(Token::Close),
            Some(Token::Id(id)) if is_license_id(id) => {
                if self.peek() == Some(Token::With) {
                    self.pos += 1;
                    matches!(
                        self.next(),
                        Some(Token::Id(exception)) if is_exception_id(exception)
                    )
                } else {
                    true
                }
            }
            _ => false,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
