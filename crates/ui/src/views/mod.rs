mod chat;
mod home;
mod lecture;
mod problem;
mod report;
mod scripts;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatPanel;
pub use home::HomeView;
pub use lecture::LectureView;
pub use problem::ProblemView;
pub use report::ReportView;
pub use state::{ViewError, ViewState, view_state_from_resource};
