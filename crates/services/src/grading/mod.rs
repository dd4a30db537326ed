mod progress;

pub use progress::{ProblemProgress, ProgressTracker};
