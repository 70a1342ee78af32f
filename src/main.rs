//! `dparser`: parse a D source file and print its AST

fn main() {
    dlang::cli::init_tracing();
    dlang::cli::run_parser();
}
