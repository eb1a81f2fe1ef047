//! UI Components
//!
//! Site chrome and the building blocks shared by lesson pages.

mod code_box;
mod footer;
mod keyword_select;
mod lesson_box;
mod navigation;

pub use code_box::CodeBox;
pub use footer::Footer;
pub use keyword_select::KeywordSelect;
pub use lesson_box::{KeyConcepts, LessonBox, Prose};
pub use navigation::Navigation;
