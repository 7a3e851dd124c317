//! Terminal UI for the verifier binary

pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
