//! Lexical analyzer for diagram source lines.
//!
//! [`tokenize_line`] scans one line left to right. At each position the
//! matchers below are tried in a fixed order and the first one that succeeds
//! consumes its text:
//!
//! 1. `%%` comment (runs to the end of the line)
//! 2. quoted string
//! 3. arrow operator, longest spelling wins, with an optional `|label|`
//! 4. bracketed group (`((..))`, `[[..]]`, `[..]`, `(..)`, `{..}`)
//! 5. word, classified through [`keywords`](crate::keywords)
//! 6. number
//! 7. `:::` directive
//! 8. `:` label
//!
//! If none of them matches, exactly one character is emitted as a
//! [`TokenKind::Default`] token, so lexing never fails.

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, delimited, not, opt, preceded, repeat},
    error::{ContextError, ErrMode},
    token::{literal, one_of, rest, take_till, take_while},
};

use crate::{
    keywords,
    span::Span,
    tokens::{Token, TokenKind},
};

type Input<'src> = &'src str;
type IResult<O> = Result<O, ErrMode<ContextError>>;

/// Connector spellings recognised as [`TokenKind::Arrow`].
///
/// Several spellings share a prefix; the lexer always takes the longest one
/// that matches, so the order here carries no meaning.
pub const ARROW_OPERATORS: &[&str] = &[
    // Flowchart links
    "-->", "->", "==>", "=>", "-.->", "-.-", "--o", "--x", "<-->", "<->", "o--", "x--", "--|",
    "--)", "(--", "---", "--->",
    // Sequence messages
    "->>", "-->>", ">>", ">", "-x", "-)",
];

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_directive_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parse a `%%` comment through the end of the line
fn comment<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    preceded("%%", rest).take().parse_next(input)
}

/// Parse a double or single quoted string closed on the same line
fn string_literal<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((
        delimited('"', take_till(0.., '"'), '"'),
        delimited('\'', take_till(0.., '\''), '\''),
    ))
    .take()
    .parse_next(input)
}

/// Parse the longest arrow operator starting at the current position
fn arrow_operator<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    let longest = ARROW_OPERATORS
        .iter()
        .copied()
        .filter(|operator| input.starts_with(*operator))
        .max_by_key(|operator| operator.len());

    match longest {
        Some(operator) => literal(operator).parse_next(input),
        None => Err(ErrMode::Backtrack(ContextError::new())),
    }
}

/// Parse an inline `|label|` attached to a link
fn pipe_label<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    delimited('|', take_till(0.., '|'), '|')
        .take()
        .parse_next(input)
}

/// Parse an arrow operator together with an abutting pipe label
fn arrow<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    (arrow_operator, opt(pipe_label)).take().parse_next(input)
}

/// Parse a node shape or grouping delimiter pair with its content.
///
/// Double delimiters must come first, otherwise `((a))` would stop at the
/// first `)`.
fn bracket_group<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((
        delimited("((", take_till(0.., ')'), "))"),
        delimited("[[", take_till(0.., ']'), "]]"),
        delimited('[', take_till(0.., ']'), ']'),
        delimited('(', take_till(0.., ')'), ')'),
        delimited('{', take_till(0.., '}'), '}'),
    ))
    .take()
    .parse_next(input)
}

/// A hyphen belongs to a word unless a connector starts at it
fn word_hyphen<'src>(input: &mut Input<'src>) -> IResult<()> {
    (not(arrow_operator), '-').void().parse_next(input)
}

fn word_tail<'src>(input: &mut Input<'src>) -> IResult<()> {
    repeat(0.., alt((take_while(1.., is_word_char).void(), word_hyphen))).parse_next(input)
}

/// Parse a bare word such as `flowchart`, `stroke-width` or `node_1`
fn word<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    (one_of(is_word_start), word_tail).take().parse_next(input)
}

/// Parse an integer or a decimal with digits on both sides of the point
fn number<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    (digit1, opt(('.', digit1))).take().parse_next(input)
}

/// Parse a `:::className` directive
fn directive<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    (":::", take_while(1.., is_directive_char))
        .take()
        .parse_next(input)
}

/// Parse a `:` label up to a `;` or the end of the line
fn label<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    (':', take_till(0.., [';', '\n']))
        .take()
        .parse_next(input)
}

/// Parse a single classified token
fn classified_token<'src>(input: &mut Input<'src>) -> IResult<(TokenKind, &'src str)> {
    alt((
        comment.map(|value| (TokenKind::Comment, value)), // Must come first, ends the line
        string_literal.map(|value| (TokenKind::String, value)),
        arrow.map(|value| (TokenKind::Arrow, value)), // Before brackets for `(--`
        bracket_group.map(|value| (TokenKind::Bracket, value)),
        word.map(|value| (keywords::classify_word(value), value)),
        number.map(|value| (TokenKind::Number, value)),
        directive.map(|value| (TokenKind::Directive, value)), // Before label
        label.map(|value| (TokenKind::Label, value)),
    ))
    .parse_next(input)
}

/// Split off the first character of a non-empty input
fn next_char<'src>(input: &mut Input<'src>) -> &'src str {
    let width = input.chars().next().map_or(0, char::len_utf8);
    let (head, tail) = input.split_at(width);
    *input = tail;
    head
}

/// Tokenize a single line of diagram source.
///
/// This never fails: text that no matcher recognises is emitted one
/// character at a time as [`TokenKind::Default`]. The returned tokens cover
/// the line without gaps or overlaps, so concatenating their values yields
/// `line` again. An empty line yields no tokens.
///
/// Lines are lexed in isolation. A `\n` inside `line` is not treated as a
/// boundary; use [`Document`](crate::Document) for multi-line text.
///
/// # Example
///
/// ```
/// use tinct::{TokenKind, tokenize_line};
///
/// let tokens = tokenize_line("A-->B");
/// let kinds: Vec<_> = tokens.iter().map(|token| token.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Default, TokenKind::Arrow, TokenKind::Default]);
/// assert_eq!(tokens[1].value(), "-->");
/// ```
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut input: Input<'_> = line;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let start = line.len() - input.len();
        let checkpoint = input;

        let (kind, value) = match classified_token(&mut input) {
            Ok(classified) => classified,
            Err(_) => {
                input = checkpoint;
                (TokenKind::Default, next_char(&mut input))
            }
        };

        tokens.push(Token::new(kind, value, Span::new(start..start + value.len())));
    }

    tokens
}
