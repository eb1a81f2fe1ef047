//! Page Components
//!
//! One component per route. Each page owns its own UI state, which is
//! dropped when the router unmounts the page.

pub mod css;
mod home;
mod not_found;
pub mod react;
pub mod typescript;
pub mod vite;

pub use home::HomePage;
pub use not_found::NotFoundPage;
