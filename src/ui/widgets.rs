//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types
//! - **State next to view**: Each widget keeps its animation state in a plain
//!   struct the app owns, and renders from it at a given instant
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (this module): Composable UI patterns

pub mod animated_button;
pub mod press_background;

pub use animated_button::AnimatedButton;
pub use press_background::PressBackground;
