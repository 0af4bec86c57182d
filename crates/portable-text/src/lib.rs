//! Portable-text rendering for the clinic site.
//!
//! Converts the block trees the studio authors into HTML. Rendering is a
//! pure function over immutable block data and never fails: authored content
//! comes from non-technical editors, so malformed or partial blocks degrade
//! to an empty render instead of breaking the page.

pub mod image;
pub mod render;
pub mod types;

pub use image::{AssetResolver, CdnAssetResolver, ImageFormat, DEFAULT_IMAGE_DIMENSION};
pub use render::Renderer;
pub use types::{AssetRef, Block, BlockStyle, ImageBlock, LinkMark, MarkDef, Span, TextBlock};
