use std::fmt::{Display, Formatter};

use crate::error::PatternError;

pub mod parse;

/// One position of a wildcard pattern.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    Literal(char),
    /// `?` or `_`: exactly one letter.
    AnyOne,
    /// `*`: zero or more letters.
    AnyMany,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    pub(crate) tokens: Vec<Token>,
}

impl Pattern {
    /// Parses `input` in full, failing on the first character that is not a
    /// letter or one of `?`, `_`, `*`.
    pub fn parse(input: &str) -> Result<Pattern, PatternError> {
        let rest = match parse::pattern(input) {
            Ok((rest, parsed)) if rest.is_empty() => return Ok(parsed),
            Ok((rest, _)) => rest,
            Err(_) => input,
        };
        Err(PatternError::InvalidToken {
            offset: input.len() - rest.len(),
            found: rest.chars().next().unwrap_or_default(),
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Literal(c) => write!(f, "{}", c)?,
                Token::AnyOne => write!(f, "?")?,
                Token::AnyMany => write!(f, "*")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PatternError;
    use crate::pattern::Pattern;
    use crate::pattern::Token::*;

    #[test]
    fn parses_whole_input() {
        assert_eq!(Pattern::parse("c_t*").unwrap().tokens(),
                   &[Literal('c'), AnyOne, Literal('t'), AnyMany]);
        assert!(Pattern::parse("").unwrap().is_empty());
    }

    #[test]
    fn reports_first_bad_token() {
        assert_eq!(Pattern::parse("ca.t"),
                   Err(PatternError::InvalidToken { offset: 2, found: '.' }));
        assert_eq!(Pattern::parse("9"),
                   Err(PatternError::InvalidToken { offset: 0, found: '9' }));
    }

    #[test]
    fn displays_canonical_form() {
        assert_eq!(Pattern::parse("a_b**c?").unwrap().to_string(), "a?b*c?");
    }
}
