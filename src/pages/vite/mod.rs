//! Vite lessons: project setup, build and deploy.

mod build;
mod setup;

pub use build::BuildPage;
pub use setup::SetupPage;
