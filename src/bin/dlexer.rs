//! `dlexer`: print the token stream of a D source file

fn main() {
    dlang::cli::init_tracing();
    dlang::cli::run_lexer();
}
