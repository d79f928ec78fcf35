/// Formatter adapters for rendering the license page
mod markdown_formatter;

pub use markdown_formatter::{MarkdownFormatter, DEFAULT_LICENSE_URL_TEMPLATE};
