use crate::core::models::plot::Plot;
use std::error::Error;

/// A sink that turns an assembled [`Plot`] into some output (image, table, …).
///
/// Renderers are only ever handed complete plots; no partial output is produced
/// when assembly fails upstream.
pub trait Renderer {
    /// The error type for rendering failures.
    type Error: Error + Send + Sync + 'static;

    /// Renders the plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce its output.
    fn render(&mut self, plot: &Plot) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, plot: &Plot) -> Result<(), Self::Error> {
        (**self).render(plot)
    }
}
