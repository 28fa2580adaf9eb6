pub mod formatter;

pub use formatter::{
    format_breakdown, format_import_report, format_response_tally, format_response_time,
    format_strength, format_wizard_state, should_use_colors,
};
