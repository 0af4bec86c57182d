//! Block-tree-to-HTML rendering.

use serde_json::Value;

use crate::image::{AssetResolver, ImageFormat, DEFAULT_IMAGE_DIMENSION};
use crate::types::{Block, BlockStyle, ImageBlock, LinkMark, MarkDef, Span, TextBlock};

/// How a single span mark renders. Decorator names and `markDefs` keys both
/// resolve into this closed set before any output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolvedMark<'a> {
    Align(Alignment),
    Decorator(Decorator),
    Link(&'a LinkMark),
    /// Neither a known decorator nor a mark def; children render unwrapped.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    fn css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decorator {
    Strong,
    Em,
    Underline,
    Strike,
}

impl Decorator {
    fn tag(&self) -> &'static str {
        match self {
            Decorator::Strong => "strong",
            Decorator::Em => "em",
            Decorator::Underline => "u",
            Decorator::Strike => "del",
        }
    }
}

fn resolve_mark<'a>(mark: &str, mark_defs: &'a [MarkDef]) -> ResolvedMark<'a> {
    match mark {
        "left" => ResolvedMark::Align(Alignment::Left),
        "center" => ResolvedMark::Align(Alignment::Center),
        "right" => ResolvedMark::Align(Alignment::Right),
        "justify" => ResolvedMark::Align(Alignment::Justify),
        "strong" => ResolvedMark::Decorator(Decorator::Strong),
        "em" => ResolvedMark::Decorator(Decorator::Em),
        "underline" => ResolvedMark::Decorator(Decorator::Underline),
        "strike-through" => ResolvedMark::Decorator(Decorator::Strike),
        key => match mark_defs.iter().find(|d| d.key() == key) {
            Some(MarkDef::Link(link)) => ResolvedMark::Link(link),
            None => ResolvedMark::Unknown,
        },
    }
}

/// Renders block trees to HTML through an injected [`AssetResolver`].
///
/// Rendering is pure: the source tree is never mutated and no call can
/// panic on malformed content.
#[derive(Debug, Clone)]
pub struct Renderer<R> {
    resolver: R,
}

impl<R: AssetResolver> Renderer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            match block {
                Block::Block(text) => self.render_text_block(&mut out, text),
                Block::Image(image) => self.render_image(&mut out, image),
            }
        }
        out
    }

    /// Tolerant entry point for raw content-store JSON. Elements that do not
    /// deserialize are skipped; non-array input renders empty.
    pub fn render_value(&self, value: &Value) -> String {
        let Some(items) = value.as_array() else {
            return String::new();
        };
        let blocks: Vec<Block> = items
            .iter()
            .filter_map(|item| match serde_json::from_value(item.clone()) {
                Ok(block) => Some(block),
                Err(err) => {
                    tracing::debug!(%err, "skipping unrenderable block");
                    None
                }
            })
            .collect();
        self.render(&blocks)
    }

    fn render_text_block(&self, out: &mut String, block: &TextBlock) {
        let tag = block_tag(block.style);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        for span in &block.children {
            out.push_str(&self.render_span(span, &block.mark_defs));
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    /// Marks nest outermost-first in array order.
    fn render_span(&self, span: &Span, mark_defs: &[MarkDef]) -> String {
        let mut html = escape_text(&span.text);
        for mark in span.marks.iter().rev() {
            html = match resolve_mark(mark, mark_defs) {
                ResolvedMark::Align(alignment) => {
                    format!(
                        "<div style=\"text-align:{}\">{}</div>",
                        alignment.css(),
                        html
                    )
                }
                ResolvedMark::Decorator(decorator) => {
                    let tag = decorator.tag();
                    format!("<{tag}>{html}</{tag}>")
                }
                ResolvedMark::Link(link) => render_link(link, &html),
                ResolvedMark::Unknown => html,
            };
        }
        html
    }

    fn render_image(&self, out: &mut String, image: &ImageBlock) {
        // No asset reference means nothing to show, not an error.
        let Some(asset) = image.asset.as_ref().filter(|a| !a.reference.is_empty()) else {
            return;
        };
        let Some(url) = self.resolver.image_url(&asset.reference, ImageFormat::Webp) else {
            tracing::debug!(asset_ref = %asset.reference, "unresolvable asset reference");
            return;
        };
        let alt = image.alt.as_deref().unwrap_or(" ");
        let width = image.width.unwrap_or(DEFAULT_IMAGE_DIMENSION);
        let height = image.height.unwrap_or(DEFAULT_IMAGE_DIMENSION);
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\" loading=\"lazy\">",
            escape_attr(&url),
            escape_attr(alt),
            width,
            height
        ));
    }
}

/// Top-level h1 is reserved for the page title outside this content, so an
/// authored h1 is downgraded one level.
fn block_tag(style: BlockStyle) -> &'static str {
    match style {
        BlockStyle::Normal => "p",
        BlockStyle::H1 => "h2",
        BlockStyle::H2 => "h2",
        BlockStyle::H3 => "h3",
        BlockStyle::H4 => "h4",
        BlockStyle::Blockquote => "blockquote",
    }
}

// noopener goes with every new-tab link so the opened page cannot reach the
// opener window. See https://css-tricks.com/use-target_blank/
fn render_link(link: &LinkMark, children: &str) -> String {
    let href = escape_attr(&link.href);
    if link.blank {
        format!("<a href=\"{href}\" target=\"_blank\" rel=\"noopener\">{children}</a>")
    } else {
        format!("<a href=\"{href}\">{children}</a>")
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
