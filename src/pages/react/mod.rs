//! React lessons: state, effects, components.

mod components;
mod use_effect;
mod use_state;

pub use components::ComponentsPage;
pub use use_effect::UseEffectPage;
pub use use_state::UseStatePage;
