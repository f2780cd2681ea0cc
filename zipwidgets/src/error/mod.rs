//! Error types

mod source;
mod widget;

pub use source::*;
pub use widget::*;

/// Any error raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
