//! Debug commands: `lex` and `parse` for inspecting the pipeline.

use std::fmt::Write as _;

use md_lexer_core::lex;
use md_parse::{Tag, TagNode};

use super::read_file;
use crate::CliError;

/// Lex a file and format its token stream.
pub fn lex_file(path: &str) -> Result<String, CliError> {
    let content = read_file(path)?;
    Ok(format_tokens(path, &content))
}

/// Parse a file and format its tag tree.
pub fn parse_file(path: &str) -> Result<String, CliError> {
    let content = read_file(path)?;
    Ok(format_tags(path, &content))
}

/// One line per token: kind, quoted text, byte span.
pub fn format_tokens(path: &str, source: &str) -> String {
    let tokens: Vec<_> = lex(source).collect();
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for tok in &tokens {
        let _ = writeln!(out, "  {} {:?} @ {}", tok.kind(), tok.text(), tok.span());
    }
    out
}

/// One line per node, children indented under their parent.
pub fn format_tags(path: &str, source: &str) -> String {
    let nodes = md_parse::parse(source);
    let mut out = format!("Tags for '{path}' ({} nodes):\n", nodes.len());
    for node in &nodes {
        write_node(&mut out, node, 1);
    }
    out
}

fn write_node(out: &mut String, node: &TagNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match &node.tag {
        Tag::Text(text) => {
            let _ = writeln!(out, "{indent}Text {text:?}");
        }
        Tag::Link { url } => {
            let _ = writeln!(out, "{indent}Link {url:?}");
        }
        tag => {
            let _ = writeln!(out, "{indent}{}", tag.name());
        }
    }
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
