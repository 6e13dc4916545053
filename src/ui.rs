//! UI module for the studio showcase
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Section views with Message handling
//! - **Theme** (`theme`): dark/light palettes and widget style functions

pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
