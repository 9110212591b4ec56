//! Family-specific formatters and the routing between them.
//!
//! Each formatter is a pure function from raw text to a sequence of
//! [`FormattedBlock`]s; no formatter keeps state across calls, so the whole
//! module is safe to drive from multiple threads without coordination.

mod code;
mod inline;
mod markdown;
mod prose;
mod slides;
mod tabular;

pub use code::CodeFormatter;
pub use inline::escape_angle;
pub use markdown::MarkdownFormatter;
pub use prose::ProseFormatter;
pub use slides::{PageFormatter, SlideFormatter};
pub use tabular::TabularFormatter;

use crate::classify::DocumentFamily;
use crate::model::FormattedBlock;

/// A pure text-to-blocks transformation for one document family.
pub trait Formatter {
    /// Format raw text into a block sequence.
    fn format(&self, text: &str) -> Vec<FormattedBlock>;

    /// Formatter name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Format text with the formatter for the given family.
///
/// The match is exhaustive over [`DocumentFamily`], so adding a family is a
/// compile error until it is routed. Word and Text both route to the prose
/// formatter; Pdf routes to the page formatter which reuses prose per page.
pub fn format_for_family(family: DocumentFamily, text: &str) -> Vec<FormattedBlock> {
    let formatter: Box<dyn Formatter> = match family {
        DocumentFamily::Word | DocumentFamily::Text => Box::new(ProseFormatter::new()),
        DocumentFamily::Excel => Box::new(TabularFormatter::new()),
        DocumentFamily::PowerPoint => Box::new(SlideFormatter::new()),
        DocumentFamily::Pdf => Box::new(PageFormatter::new()),
        DocumentFamily::Code => Box::new(CodeFormatter::new()),
        DocumentFamily::Markdown => Box::new(MarkdownFormatter::new()),
    };
    log::debug!("routing {} content to {} formatter", family, formatter.name());
    formatter.format(text)
}
