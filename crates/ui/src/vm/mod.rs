mod catalog_vm;
mod chat_vm;
mod markdown_vm;
mod report_vm;
mod time_fmt;

pub use catalog_vm::{BucketVm, CatalogVm, LectureButtonVm, ProblemButtonVm, map_catalog};
pub use chat_vm::{
    ChatVm, MessageVm, Notice, TargetVm, map_lecture_chat, map_problem_chat, notices_for_open,
    notices_for_turn,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use report_vm::{ReportVm, map_report};
pub use time_fmt::format_datetime;
