//! Small token grammars found inside param strings.
//!
//! Built on `winnow` 0.7. Covers numeric lengths with an optional `px`
//! suffix (`"16"`, `"16px"`, `"-4.5"`) and the delimited edge-inset form
//! (`"8, 16"`, `"8px 16px 8px"`).

use smallvec::SmallVec;
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

/// Maximum number of tokens read from an edge-inset string.
pub const MAX_INSET_TOKENS: usize = 4;

/// Strings meaning "fill the available space" for a dimension.
pub const FILL_SENTINELS: &[&str] = &["double.infinity", "infinity", "fill", "100%"];

pub fn is_fill_sentinel(s: &str) -> bool {
    FILL_SENTINELS.contains(&s.trim())
}

/// Parse a complete length token. Returns `None` for anything else.
pub fn parse_length(s: &str) -> Option<f32> {
    length.parse(s.trim()).ok()
}

/// Split an edge-inset string into at most four numeric values.
///
/// Tokens are separated by commas and/or whitespace. A token that is not a
/// length reads as `0`; tokens after the fourth are ignored.
pub fn inset_tokens(s: &str) -> SmallVec<[f32; 4]> {
    let mut rest = s;
    let mut out = SmallVec::new();

    skip_separators(&mut rest);
    while !rest.is_empty() && out.len() < MAX_INSET_TOKENS {
        match raw_token.parse_next(&mut rest) {
            Ok(tok) => out.push(parse_length(tok).unwrap_or(0.0)),
            Err(_) => break,
        }
        skip_separators(&mut rest);
    }
    out
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['-', '+'])).parse_next(input)
}

fn digits<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.').parse_next(input)
}

fn px_suffix<'a>(input: &mut &'a str) -> ModalResult<Option<&'a str>> {
    opt("px").parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<f32> {
    let start = *input;
    sign.parse_next(input)?;
    digits.parse_next(input)?;
    let matched = &start[..start.len() - input.len()];
    matched
        .parse::<f32>()
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}

fn length(input: &mut &str) -> ModalResult<f32> {
    let value = number.parse_next(input)?;
    px_suffix.parse_next(input)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ErrMode::Backtrack(ContextError::new()))
    }
}

fn raw_token<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., is_separator).parse_next(input)
}

fn skip_separators(input: &mut &str) {
    let _: Result<&str, ErrMode<ContextError>> = take_while(0.., is_separator).parse_next(input);
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}
