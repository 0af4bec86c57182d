use serde::{Deserialize, Serialize};

/// Portable-text block tree types, matching what the studio stores.
///
/// Every content field defaults so that partially-authored blocks still
/// deserialize; the renderer decides what a missing piece degrades to.

/// A top-level node in the block array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum Block {
    /// A paragraph or heading of text spans.
    Block(TextBlock),
    /// An embedded image.
    Image(ImageBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default, rename = "markDefs")]
    pub mark_defs: Vec<MarkDef>,
}

/// Block-level style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
}

/// A run of text with zero or more marks. A mark is either a decorator name
/// (`strong`, `center`, ...) or the `_key` of an entry in the enclosing
/// block's `markDefs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation definitions referenced from span marks by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum MarkDef {
    Link(LinkMark),
}

impl MarkDef {
    pub fn key(&self) -> &str {
        match self {
            MarkDef::Link(link) => &link.key,
        }
    }
}

/// A hyperlink annotation. `blank` requests a new tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkMark {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub blank: bool,
}

/// An embedded image node. The asset reference points into external asset
/// storage and is resolved to a URL at render time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: String,
}
