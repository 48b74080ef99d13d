//! Filesystem adapters: chat id payload in, rendered report out.

pub mod payload_file;
pub mod report_file;

pub use payload_file::PayloadFile;
pub use report_file::ReportFile;
