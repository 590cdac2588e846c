//! Chat UI — presentational views over `ChatSnapshot`.
//!
//! Views never mutate the controller. They return a `WidgetIntent` and the
//! app applies it.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
