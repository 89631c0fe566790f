//! Terminal output formatting
//!
//! Colored tiles, the boxed board and the keyboard summary for line mode.

pub mod display;
pub mod formatters;

pub use display::{
    print_score_result, render_board, render_feedback, render_keyboard, render_outcome,
    render_score_result,
};
