pub mod writer;

pub use writer::{
    render_report, report_filename, write_report, write_results, DEFAULT_OUTPUT_DIR,
    REPORT_HEADER,
};
