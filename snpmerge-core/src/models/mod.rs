pub mod annotations;
pub mod merge_event;
pub mod report;
pub mod report_row;
pub mod rsid;

// re-export for cleaner imports
pub use self::annotations::Annotations;
pub use self::merge_event::MergeEvent;
pub use self::report::{MergedRsidLedger, Report, ReportFormat};
pub use self::report_row::ReportRow;
pub use self::rsid::Rsid;
