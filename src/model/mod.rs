//! Data model for the rendering pipeline.
//!
//! These types form the intermediate representation between family-specific
//! formatting and HTML serialization. Everything here is immutable after
//! creation; the pipeline is a one-shot transformation per render request.

mod block;
mod document;

pub use block::{CodeToken, FormattedBlock, TokenKind};
pub use document::{RawDocument, RenderedDocument};
