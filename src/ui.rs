//! UI module for Rebound
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Animation** (`animation`): Curves and tweens sampled at explicit instants
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): The animated button and its press decoration

pub mod animation;
pub mod icons;
pub mod primitives;
pub mod theme;
pub mod widgets;
