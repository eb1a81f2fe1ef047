//! CSS layout lessons with live demos.

mod flexbox;
mod grid;

pub use flexbox::FlexboxPage;
pub use grid::GridPage;
