use nom::branch::alt;
use nom::character::complete::{char, one_of, satisfy};
use nom::combinator::{map, value};
use nom::multi::many0;
use nom::IResult;

use crate::alphabet::is_letter;
use crate::pattern::{Pattern, Token};

/// Parses as many tokens as possible; whatever is left over is malformed.
pub fn pattern(input: &str) -> IResult<&str, Pattern> {
    map(
        many0(token),
        |x| Pattern { tokens: collapse_stars(x) },
    )(input)
}

// `**` matches exactly what `*` does, but doubles the search.
fn collapse_stars(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for t in tokens {
        if t == Token::AnyMany && out.last() == Some(&Token::AnyMany) {
            continue;
        }
        out.push(t);
    }
    out
}

fn any_one(input: &str) -> IResult<&str, Token> {
    value(Token::AnyOne, one_of("?_"))(input)
}

fn any_many(input: &str) -> IResult<&str, Token> {
    value(Token::AnyMany, char('*'))(input)
}

fn literal(input: &str) -> IResult<&str, Token> {
    map(satisfy(is_letter), Token::Literal)(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        any_one,
        any_many,
        literal,
    ))(input)
}
