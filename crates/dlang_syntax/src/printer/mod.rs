//! Deterministic text rendering of an AST.
//!
//! One line per node in depth-first preorder:
//!
//! ```text
//! <indent>[Kind][ payload][ name=<name>]<suffix>(line <n>)
//! ```
//!
//! The payload is a decimal integer, a `%g`-style real, or raw text. The suffix is `  (true) ` / `  (false) ` for
//! boolean literals, `  (.N) ` for positional tuple access, and two spaces otherwise. This text is compared
//! byte-for-byte against golden files, so changing it is a breaking change.
//!
//! ## Examples
//! ```rust
//! use dlang_syntax::{parser, printer};
//!
//! let program = parser::parse_source("print true;").unwrap();
//! assert_eq!(
//!     printer::print_tree(&program),
//!     "[Program]  (line 1)\n  [Print]  (line 1)\n    [BoolLit] 1  (true) (line 1)\n"
//! );
//! ```

mod config;
mod writer;

pub use config::PrinterConfig;
pub use writer::TreeWriter;

use crate::ast::{Node, NodeKind, Payload};
use dlang_core::numeric::format_general;

/// AST printer
pub struct AstPrinter {
    writer: TreeWriter,
}

impl AstPrinter {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            writer: TreeWriter::new(config),
        }
    }

    /// Render `root` and everything below it.
    ///
    /// Walks the tree with an explicit stack; left-nested chains can be far deeper than the call stack allows.
    pub fn print(mut self, root: &Node) -> String {
        let mut stack = vec![Step::Enter(root)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node) => {
                    self.writer.write(&node_line(node));
                    self.writer.newline();
                    self.writer.indent();
                    stack.push(Step::Leave);
                    stack.extend(node.children().iter().rev().map(Step::Enter));
                }
                Step::Leave => self.writer.dedent(),
            }
        }
        self.writer.finish()
    }
}

enum Step<'n> {
    Enter(&'n Node),
    Leave,
}

/// Print `root` with the default (golden) configuration.
pub fn print_tree(root: &Node) -> String {
    AstPrinter::new(PrinterConfig::default()).print(root)
}

/// A single node's line, without indentation or trailing newline.
pub fn node_line(node: &Node) -> String {
    let mut line = format!("[{}]", node.kind().name());

    match node.payload() {
        Payload::Absent => {}
        Payload::Int(v) => line.push_str(&format!(" {v}")),
        Payload::Real(v) => line.push_str(&format!(" {}", format_general(*v))),
        Payload::Text(s) => line.push_str(&format!(" {s}")),
    }

    if let Some(name) = node.name() {
        line.push_str(&format!(" name={name}"));
    }

    let value = node.payload().as_int().unwrap_or_default();
    match node.kind() {
        NodeKind::BoolLit => line.push_str(&format!("  ({}) ", value != 0)),
        NodeKind::DotInt => line.push_str(&format!("  (.{value}) ")),
        _ => line.push_str("  "),
    }
    line.push_str(&format!("(line {})", node.line()));
    line
}
