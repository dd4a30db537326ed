use std::path::{Path, PathBuf};

use tutor_core::model::Problem;

const IMPACT_IDS: &[&str] = &["239", "243", "249", "252"];
const MOMENTUM_IDS: &[&str] = &["176", "198", "209"];
const WORK_ENERGY_IDS: &[&str] = &["141", "158", "161", "162"];

/// Where a problem's figure lives under `root`: `<root>/<folder>/images/<file>`.
///
/// Returns `None` when the problem maps to no homework folder.
#[must_use]
pub fn resolve_image_path(root: &Path, problem: &Problem) -> Option<PathBuf> {
    let pid = problem.id().as_str();
    let category = problem.category().to_lowercase();
    let by_id = format!("{pid}.png");

    let (folder, file) = if category.contains("impact") || IMPACT_IDS.contains(&pid) {
        ("HW 10 (Impact)".to_string(), by_id)
    } else if category.contains("momentum")
        || category.contains("impulse")
        || MOMENTUM_IDS.contains(&pid)
    {
        ("HW 9 (Impuls and momentum)".to_string(), by_id)
    } else if category.contains("work")
        || category.contains("energy")
        || WORK_ENERGY_IDS.contains(&pid)
    {
        ("HW 8 (work and energy)".to_string(), by_id)
    } else if let (Some(title), Some(subtitle)) = (problem.hw_title(), problem.hw_subtitle()) {
        let stem = pid.rsplit('_').next().unwrap_or(pid);
        (format!("{title} ({subtitle})"), format!("{stem}.png"))
    } else {
        return None;
    };

    Some(root.join(folder).join("images").join(file))
}
