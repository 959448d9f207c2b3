pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_rating, format_rejections, format_scored_table,
    format_summary, rating_distribution, should_use_colors,
};
