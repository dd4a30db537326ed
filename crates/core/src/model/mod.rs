mod ids;
mod lecture;
mod problem;
mod report;
mod transcript;

pub use ids::{IdError, ProblemId, StudentName, TargetName};
pub use lecture::LectureTopic;
pub use problem::{ExpectedAnswer, Problem, ProblemDraft, ProblemError};
pub use report::{Report, Score};
pub use transcript::{Role, Transcript, Turn};
