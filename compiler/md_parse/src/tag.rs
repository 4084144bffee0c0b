//! Tag tree vocabulary.
//!
//! The parser turns tokens into [`TagNode`]s; a renderer turns those into
//! output. Only container tags (`Bold`, `Cursive`, `Header1`, `Link`) carry
//! children.

/// What a [`TagNode`] represents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// Literal text with escapes already applied.
    Text(String),
    Bold,
    Cursive,
    Header1,
    NewLine,
    /// `[label](url)`. The label is the node's children.
    Link { url: String },
}

impl Tag {
    /// Returns `true` for tags that wrap child nodes.
    pub fn is_container(&self) -> bool {
        matches!(self, Tag::Bold | Tag::Cursive | Tag::Header1 | Tag::Link { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tag::Text(_) => "Text",
            Tag::Bold => "Bold",
            Tag::Cursive => "Cursive",
            Tag::Header1 => "Header1",
            Tag::NewLine => "NewLine",
            Tag::Link { .. } => "Link",
        }
    }
}

/// One node of the tag tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagNode {
    pub tag: Tag,
    pub children: Vec<TagNode>,
}

impl TagNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(Tag::Text(text.into()))
    }

    pub fn new_line() -> Self {
        Self::leaf(Tag::NewLine)
    }

    pub fn bold(children: Vec<TagNode>) -> Self {
        Self::container(Tag::Bold, children)
    }

    pub fn cursive(children: Vec<TagNode>) -> Self {
        Self::container(Tag::Cursive, children)
    }

    pub fn header1(children: Vec<TagNode>) -> Self {
        Self::container(Tag::Header1, children)
    }

    pub fn link(url: impl Into<String>, children: Vec<TagNode>) -> Self {
        Self::container(Tag::Link { url: url.into() }, children)
    }

    fn leaf(tag: Tag) -> Self {
        TagNode {
            tag,
            children: Vec::new(),
        }
    }

    fn container(tag: Tag, children: Vec<TagNode>) -> Self {
        debug_assert!(tag.is_container());
        TagNode { tag, children }
    }

    /// The literal text of a `Text` node.
    pub fn as_text(&self) -> Option<&str> {
        match &self.tag {
            Tag::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants, in order.
    ///
    /// `NewLine` contributes `"\n"`; link urls are not included.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.tag {
            Tag::Text(text) => out.push_str(text),
            Tag::NewLine => out.push('\n'),
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Append literal text, merging into a trailing `Text` node.
/// Empty text is dropped.
pub(crate) fn push_text(nodes: &mut Vec<TagNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(TagNode {
        tag: Tag::Text(last),
        ..
    }) = nodes.last_mut()
    {
        last.push_str(text);
    } else {
        nodes.push(TagNode::text(text));
    }
}

/// Append a node, keeping adjacent `Text` nodes merged.
pub(crate) fn push_node(nodes: &mut Vec<TagNode>, node: TagNode) {
    if let Tag::Text(text) = &node.tag {
        push_text(nodes, text);
    } else {
        nodes.push(node);
    }
}
