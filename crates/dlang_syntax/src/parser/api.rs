/// Parse a token stream into a `Program` node.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `dlang_syntax::lexer`.
///
/// ## Errors
/// Returns the first syntax error; no tree is produced on failure.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Node, CompileError> {
    let result = Parser::new(tokens).parse();
    if let Ok(program) = &result {
        tracing::trace!(node_count = program.node_count(), "parsed");
    }
    result
}

/// Lex and parse `source` in one step.
///
/// Tokens are pulled from [`Lexer::next_token`](crate::lexer::Lexer::next_token) until end of input. When the lexer
/// fails, the tokens read so far are parsed first: a syntax error located before the bad character is what an
/// on-demand parser would have hit first, so it wins over the lexical error.
///
/// ## Errors
/// Returns whichever error comes first in the input: the lexical error or the first syntax error.
pub fn parse_source(source: &str) -> Result<Node, CompileError> {
    let mut lexer = crate::lexer::Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::Eof;
                tokens.push(token);
                if done {
                    return parse(&tokens);
                }
            }
            Err(lexical) => return Err(earliest_error(tokens, lexical)),
        }
    }
}

/// Pick the error an on-demand parse of `read` (the tokens before `lexical`) reaches first.
fn earliest_error(mut read: Vec<Token>, lexical: CompileError) -> CompileError {
    // End of input stands in at the bad character; needing a token there means the lexer failed first.
    read.push(Token::new(TokenKind::Eof, lexical.position(), lexical.span()));
    match Parser::new(&read).parse() {
        Err(syntax) if syntax.span().start < lexical.span().start => syntax,
        _ => lexical,
    }
}
