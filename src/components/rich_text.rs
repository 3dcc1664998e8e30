use leptos::*;

use crate::view::rich_text::{RichNode, RichText};

/// Render sanitized markup. Only the node kinds the sanitizer produces
/// can reach the DOM.
pub fn render_rich_text(text: &RichText) -> View {
    render_nodes(text.nodes())
}

fn render_nodes(nodes: &[RichNode]) -> View {
    nodes.iter().map(render_node).collect_view()
}

fn render_node(node: &RichNode) -> View {
    match node {
        RichNode::Text(text) => text.clone().into_view(),
        RichNode::LineBreak => view! { <br /> }.into_view(),
        RichNode::Strong(children) => {
            view! { <strong>{render_nodes(children)}</strong> }.into_view()
        }
        RichNode::Emphasis(children) => view! { <em>{render_nodes(children)}</em> }.into_view(),
        RichNode::Tone(tone, children) => {
            view! { <span class=tone.css_class()>{render_nodes(children)}</span> }.into_view()
        }
    }
}
