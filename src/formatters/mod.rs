mod report;
mod writer;

pub use report::render_report;
pub use writer::Writer;
