//! TypeScript lessons: basics, types and interfaces.

mod basics;
mod types;

pub use basics::BasicsPage;
pub use types::TypesPage;
