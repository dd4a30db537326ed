use tutor_core::model::Report;

use super::markdown_vm::markdown_to_html;
use super::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub student: String,
    pub topic: String,
    pub score: String,
    pub narrative_html: String,
    pub generated_at: String,
}

#[must_use]
pub fn map_report(report: &Report) -> ReportVm {
    ReportVm {
        student: report.student_name().to_string(),
        topic: report.topic().to_string(),
        score: report.score().to_string(),
        narrative_html: markdown_to_html(report.narrative()),
        generated_at: format_datetime(report.generated_at()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::model::Score;
    use tutor_core::time::fixed_now;

    #[test]
    fn report_maps_score_and_narrative() {
        let report = Report::new(
            "Ada",
            "Impact",
            Score::clamped(7),
            "## Overview\nGood.",
            fixed_now(),
        );
        let vm = map_report(&report);
        assert_eq!(vm.score, "7/10");
        assert!(vm.narrative_html.contains("<h2>Overview</h2>"));
        assert_eq!(vm.generated_at, "2023-11-14 22:13 UTC");
    }
}
