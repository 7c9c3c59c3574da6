//! CLI interface for revsent

mod charts;
mod ui;
mod view;

#[cfg(test)]
mod tests;

pub use charts::{parse_hex_color, stacked_bar, TerminalCharts};
pub use ui::{
    display_banner, display_status, handle_input_with_history, print_help, PromptInput,
};
pub use view::{format_row, gauge_bar, TerminalView};

// Re-export core types
pub use revsent_core::{Error, Result};
