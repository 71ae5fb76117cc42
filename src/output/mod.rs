pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{CompatibilityReport, RankingReport, Report, ReportMetadata, SuggestionReport};
