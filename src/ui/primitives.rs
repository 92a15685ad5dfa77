//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Wrap, don't own**: Each primitive takes arbitrary content and adds one concern
//!
//! # Contents
//!
//! - [`Pressable`] - Publishes press-down / release / cancel and taps
//! - [`ScaleEffect`] - Draws content scaled about its center

pub mod pressable;
pub mod scale_effect;

pub use pressable::Pressable;
pub use scale_effect::ScaleEffect;
