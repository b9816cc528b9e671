use crate::lexer::TERMINATOR;
use crate::token::Token;

/// Validates token stream invariants for `input`.
///
/// Asserts that:
/// - Concatenated token texts reproduce `input` exactly
/// - Every close delimiter matches the innermost open delimiter of the same value
/// - No delimiter is left open at the end of a line
/// - Block markers only appear as the first token of a line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, tokens: &[Token<'_>]) {
    let rebuilt: String = tokens.iter().map(Token::text).collect();
    assert!(
        rebuilt == input,
        "token stream is not lossless: expected {input:?}, got {rebuilt:?}"
    );

    let mut open: Vec<&str> = Vec::new();
    let mut line_start = true;

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::OpenDelimiter(text) => open.push(text),
            Token::CloseDelimiter(text) => {
                let innermost = open.pop();
                assert!(
                    innermost == Some(text),
                    "close {text:?} at token {i} does not match innermost open {innermost:?}"
                );
            }
            Token::BlockMarker(text) => assert!(
                line_start,
                "block marker {text:?} at token {i} does not start its line"
            ),
            Token::Text(_) => {}
        }

        line_start = token.text().ends_with(TERMINATOR);
        if line_start {
            assert!(
                open.is_empty(),
                "delimiters {open:?} still open at end of line (token {i})"
            );
        }
    }

    assert!(
        open.is_empty(),
        "delimiters {open:?} still open at end of input"
    );
}
