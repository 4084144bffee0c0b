use super::*;
use crate::parse;
use md_lexer_core::lex;
use pretty_assertions::assert_eq;

fn text(s: &str) -> TagNode {
    TagNode::text(s)
}

// ─── Plain Content ─────────────────────────────────────────────

#[test]
fn empty_input_has_no_nodes() {
    assert_eq!(parse(""), vec![]);
}

#[test]
fn plain_text() {
    assert_eq!(parse("plain words"), vec![text("plain words")]);
}

#[test]
fn lines_are_separated_by_new_line_nodes() {
    assert_eq!(
        parse("a\nb\n"),
        vec![text("a"), TagNode::new_line(), text("b"), TagNode::new_line()]
    );
}

// ─── Emphasis ──────────────────────────────────────────────────

#[test]
fn cursive_span() {
    assert_eq!(parse("_a_"), vec![TagNode::cursive(vec![text("a")])]);
}

#[test]
fn bold_span() {
    assert_eq!(parse("__a__"), vec![TagNode::bold(vec![text("a")])]);
}

#[test]
fn cursive_nests_in_bold() {
    assert_eq!(
        parse("__a _b_ c__"),
        vec![TagNode::bold(vec![
            text("a "),
            TagNode::cursive(vec![text("b")]),
            text(" c"),
        ])]
    );
}

#[test]
fn bold_inside_cursive_is_literal() {
    assert_eq!(
        parse("_a __b__ c_"),
        vec![TagNode::cursive(vec![text("a __b__ c")])]
    );
}

#[test]
fn unclosed_emphasis_is_literal() {
    assert_eq!(parse("_a"), vec![text("_a")]);
    assert_eq!(parse("__a"), vec![text("__a")]);
}

#[test]
fn empty_emphasis_is_literal() {
    assert_eq!(parse("____"), vec![text("____")]);
    assert_eq!(parse("__"), vec![text("__")]);
}

#[test]
fn emphasis_inside_words() {
    assert_eq!(
        parse("a_b_c"),
        vec![text("a"), TagNode::cursive(vec![text("b")]), text("c")]
    );
}

#[test]
fn emphasis_does_not_cross_lines() {
    assert_eq!(
        parse("_a\nb_"),
        vec![text("_a"), TagNode::new_line(), text("b_")]
    );
}

// ─── Escapes ───────────────────────────────────────────────────

#[test]
fn escaped_underscore_is_literal() {
    assert_eq!(parse("\\_a_"), vec![text("_a_")]);
}

#[test]
fn escaped_closer_is_skipped() {
    assert_eq!(
        parse("_a\\_b_"),
        vec![TagNode::cursive(vec![text("a_b")])]
    );
}

#[test]
fn escape_before_text_is_literal_backslash() {
    assert_eq!(parse("\\a"), vec![text("\\a")]);
}

#[test]
fn trailing_escape_is_literal() {
    assert_eq!(parse("a\\"), vec![text("a\\")]);
    assert_eq!(parse("a\\\nb"), vec![text("a\\"), TagNode::new_line(), text("b")]);
}

#[test]
fn escaped_escape() {
    assert_eq!(parse("\\\\_a_"), vec![text("\\"), TagNode::cursive(vec![text("a")])]);
}

#[test]
fn escaped_brackets_are_literal() {
    assert_eq!(parse("\\[a](b)"), vec![text("[a](b)")]);
}

// ─── Headers ───────────────────────────────────────────────────

#[test]
fn header_line() {
    assert_eq!(parse("# Title"), vec![TagNode::header1(vec![text("Title")])]);
}

#[test]
fn indented_header_line() {
    assert_eq!(parse("  # Title"), vec![TagNode::header1(vec![text("Title")])]);
}

#[test]
fn header_after_newline() {
    assert_eq!(
        parse("a\n# b"),
        vec![
            text("a"),
            TagNode::new_line(),
            TagNode::header1(vec![text("b")]),
        ]
    );
}

#[test]
fn header_with_emphasis() {
    assert_eq!(
        parse("# _a_ b\n"),
        vec![
            TagNode::header1(vec![TagNode::cursive(vec![text("a")]), text(" b")]),
            TagNode::new_line(),
        ]
    );
}

#[test]
fn empty_header() {
    assert_eq!(
        parse("#\n"),
        vec![TagNode::header1(vec![]), TagNode::new_line()]
    );
    assert_eq!(parse("# "), vec![TagNode::header1(vec![])]);
}

#[test]
fn header_keeps_extra_spaces() {
    assert_eq!(parse("#   x"), vec![TagNode::header1(vec![text("  x")])]);
}

#[test]
fn hash_without_space_is_text() {
    assert_eq!(parse("#Title"), vec![text("#Title")]);
    assert_eq!(parse("a # b"), vec![text("a # b")]);
}

#[test]
fn stray_header_marker_mid_line_is_literal() {
    // The lexer never emits this, but hand-built streams may.
    let tokens = [
        Token::new(TokenKind::Text, "a", Span::new(0, 1)),
        Token::new(TokenKind::Header1, "#", Span::new(1, 2)),
    ];
    assert_eq!(InlineParser::new().parse(tokens), vec![text("a#")]);
}

// ─── Links ─────────────────────────────────────────────────────

#[test]
fn link() {
    assert_eq!(
        parse("[x](y)"),
        vec![TagNode::link("y", vec![text("x")])]
    );
}

#[test]
fn link_with_emphasis_and_underscored_url() {
    assert_eq!(
        parse("see [__a__](http://e.com/a_b) now"),
        vec![
            text("see "),
            TagNode::link("http://e.com/a_b", vec![TagNode::bold(vec![text("a")])]),
            text(" now"),
        ]
    );
}

#[test]
fn brackets_without_url_are_literal() {
    assert_eq!(parse("[x]"), vec![text("[x]")]);
    assert_eq!(parse("[x] (y)"), vec![text("[x] (y)")]);
    assert_eq!(parse("(y)"), vec![text("(y)")]);
}

#[test]
fn unclosed_link_is_literal() {
    assert_eq!(parse("[x](y"), vec![text("[x](y")]);
    assert_eq!(parse("[x"), vec![text("[x")]);
}

#[test]
fn nested_brackets_are_literal() {
    assert_eq!(parse("[a [b] c](d)"), vec![text("[a [b] c](d)")]);
}

#[test]
fn empty_link_parts() {
    assert_eq!(parse("[](u)"), vec![TagNode::link("u", vec![])]);
    assert_eq!(parse("[t]()"), vec![TagNode::link("", vec![text("t")])]);
}

// ─── Boundary ──────────────────────────────────────────────────

#[test]
fn accepts_any_token_iterator() {
    let parser = InlineParser::default();
    let from_lexer = parser.parse(lex("_x_"));
    let from_vec = parser.parse(lex("_x_").collect::<Vec<_>>());
    assert_eq!(from_lexer, from_vec);
}

#[test]
fn parser_is_reusable() {
    let parser = InlineParser::new();
    assert_eq!(parser.parse(lex("__a__")), parser.parse(lex("__a__")));
}

#[test]
fn link_url_ends_at_first_paren_even_if_escaped() {
    assert_eq!(
        parse("[a](x\\))"),
        vec![TagNode::link("x\\", vec![text("a")]), text(")")]
    );
}

// ─── Large Malformed Input ─────────────────────────────────────

#[test]
fn many_unclosed_brackets_are_literal() {
    let source = "[".repeat(100_000);
    assert_eq!(parse(&source), vec![text(&source)]);
}

#[test]
fn many_links_missing_close_paren_are_literal() {
    let source = "[a](".repeat(20_000);
    assert_eq!(parse(&source), vec![text(&source)]);
}

#[test]
fn long_underscore_run_is_literal() {
    let source = "_".repeat(100_001);
    assert_eq!(parse(&source), vec![text(&source)]);
}

// ─── Property Tests ────────────────────────────────────────────

mod proptest_parse {
    use crate::tag::{Tag, TagNode};
    use crate::parse;
    use proptest::prelude::*;

    fn markdown_like() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("_"),
                Just("__"),
                Just("#"),
                Just(" "),
                Just("\n"),
                Just("\\"),
                Just("("),
                Just(")"),
                Just("["),
                Just("]"),
                Just("word"),
                Just("\u{e9}"),
            ],
            0..48,
        )
        .prop_map(|parts| parts.concat())
    }

    /// Bytes of output text, counting urls and line breaks.
    fn output_len(nodes: &[TagNode]) -> usize {
        nodes
            .iter()
            .map(|node| match &node.tag {
                Tag::Text(text) => text.len(),
                Tag::NewLine => 1,
                Tag::Link { url } => url.len() + output_len(&node.children),
                _ => output_len(&node.children),
            })
            .sum()
    }

    proptest! {
        #[test]
        fn output_never_exceeds_input(source in markdown_like()) {
            let nodes = parse(&source);
            prop_assert!(output_len(&nodes) <= source.len());
        }

        #[test]
        fn plain_words_round_trip(words in proptest::collection::vec("[a-z]{1,8}", 1..8)) {
            let source = words.join(" ");
            prop_assert_eq!(parse(&source), vec![TagNode::text(source.clone())]);
        }

        #[test]
        fn new_line_count_matches_input(source in markdown_like()) {
            let nodes = parse(&source);
            let breaks = nodes.iter().filter(|n| n.tag == Tag::NewLine).count();
            prop_assert_eq!(breaks, source.matches('\n').count());
        }

        #[test]
        fn no_adjacent_text_nodes(source in markdown_like()) {
            let nodes = parse(&source);
            for pair in nodes.windows(2) {
                prop_assert!(pair[0].as_text().is_none() || pair[1].as_text().is_none());
            }
        }
    }
}
