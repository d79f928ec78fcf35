use crate::shared::Result;

/// OutputPresenter port for presenting a rendered license page
///
/// This port abstracts the destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}

impl<P: OutputPresenter + ?Sized> OutputPresenter for Box<P> {
    fn present(&self, content: &str) -> Result<()> {
        (**self).present(content)
    }
}
