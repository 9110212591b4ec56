//! Rendering: options, HTML serialization, and pipeline composition.

mod html;
mod options;
mod renderer;

pub use html::serialize;
pub use options::RenderOptions;
pub use renderer::DocumentRenderer;
