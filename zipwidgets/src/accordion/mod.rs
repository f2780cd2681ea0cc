//! Accordion - table row-groups that expand and collapse independently.
//!
//! Section state is held explicitly by [`Accordion`]. The document only ever
//! receives the projection of that state: each section body's display, its
//! button label, and the display of the shared `extra-col` cells.

mod render;
mod state;

pub use state::{Accordion, SectionState, any_expanded, extra_columns_display};
