//! Safe rendering of server-supplied summary markup.
//!
//! The markup is parsed with `scraper` and only a small subset of inline
//! elements becomes structure: `strong`/`b`, `em`/`i`, `br` and
//! status-colored `span`s. Any other element contributes its text content.
//! Comments and the bodies of `script`/`style` are dropped.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node};

/// Status color carried by a `<span style="color:var(--status-…)">`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "status-good",
            Self::Warn => "status-warn",
            Self::Bad => "status-bad",
        }
    }

    fn from_element(element: &Element) -> Option<Self> {
        let attrs = [element.attr("style"), element.attr("class")]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        if attrs.contains("status-good") {
            Some(Self::Good)
        } else if attrs.contains("status-warn") {
            Some(Self::Warn)
        } else if attrs.contains("status-bad") {
            Some(Self::Bad)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RichNode {
    Text(String),
    Strong(Vec<RichNode>),
    Emphasis(Vec<RichNode>),
    Tone(Tone, Vec<RichNode>),
    LineBreak,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText(pub Vec<RichNode>);

impl RichText {
    /// Untrusted text shown as-is
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            Self::default()
        } else {
            Self(vec![RichNode::Text(text.to_string())])
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn nodes(&self) -> &[RichNode] {
        &self.0
    }

    /// Text content with structure removed, line breaks as `\n`
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.0, &mut out);
        out
    }
}

fn collect_text(nodes: &[RichNode], out: &mut String) {
    for node in nodes {
        match node {
            RichNode::Text(t) => out.push_str(t),
            RichNode::LineBreak => out.push('\n'),
            RichNode::Strong(c) | RichNode::Emphasis(c) | RichNode::Tone(_, c) => {
                collect_text(c, out)
            }
        }
    }
}

/// Convert server markup into the safe node tree
pub fn sanitize(markup: &str) -> RichText {
    let fragment = Html::parse_fragment(markup);
    let mut nodes = Vec::new();
    convert_children(fragment.root_element(), &mut nodes);
    RichText(nodes)
}

fn convert_children(element: ElementRef<'_>, out: &mut Vec<RichNode>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_text(out, text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    convert_element(child, out);
                }
            }
            // comments, doctypes, processing instructions
            _ => {}
        }
    }
}

fn convert_element(element: ElementRef<'_>, out: &mut Vec<RichNode>) {
    match element.value().name() {
        "strong" | "b" => out.push(RichNode::Strong(children_of(element))),
        "em" | "i" => out.push(RichNode::Emphasis(children_of(element))),
        "br" => out.push(RichNode::LineBreak),
        "span" => match Tone::from_element(element.value()) {
            Some(tone) => out.push(RichNode::Tone(tone, children_of(element))),
            None => convert_children(element, out),
        },
        "script" | "style" | "template" => {}
        _ => convert_children(element, out),
    }
}

fn children_of(element: ElementRef<'_>) -> Vec<RichNode> {
    let mut nodes = Vec::new();
    convert_children(element, &mut nodes);
    nodes
}

/// Append text, merging with a preceding text node
fn push_text(out: &mut Vec<RichNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(RichNode::Text(last)) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(RichNode::Text(text.to_string()));
    }
}
