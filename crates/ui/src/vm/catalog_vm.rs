use tutor_core::category::group_by_bucket;
use tutor_core::model::{LectureTopic, Problem};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemButtonVm {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketVm {
    pub title: String,
    pub problems: Vec<ProblemButtonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LectureButtonVm {
    pub code: &'static str,
    pub label: String,
}

/// Everything the landing page lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogVm {
    pub buckets: Vec<BucketVm>,
    pub lectures: Vec<LectureButtonVm>,
}

#[must_use]
pub fn map_catalog(problems: &[Problem]) -> CatalogVm {
    let buckets = group_by_bucket(problems)
        .into_iter()
        .map(|(bucket, members)| {
            let title = bucket.display_name();
            let problems = members
                .into_iter()
                .map(|problem| ProblemButtonVm {
                    id: problem.id().to_string(),
                    label: problem.button_label(&title),
                })
                .collect();
            BucketVm { title, problems }
        })
        .collect();

    let lectures = LectureTopic::ALL
        .into_iter()
        .map(|topic| LectureButtonVm {
            code: topic.code(),
            label: format!("{} {}", topic.code(), topic.title()),
        })
        .collect();

    CatalogVm { buckets, lectures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::model::ProblemDraft;

    fn problem(id: &str, category: &str, subtitle: Option<&str>) -> Problem {
        ProblemDraft {
            id: id.into(),
            category: category.into(),
            statement: "statement".into(),
            hw_subtitle: subtitle.map(str::to_string),
            ..ProblemDraft::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn buckets_sort_by_prefix_and_work_energy_is_last() {
        let problems = vec![
            problem("161", "Work and Energy", None),
            problem("S_1", "Statics: Equilibrium", None),
            problem("198", "Impulse and Momentum", Some("impulse")),
        ];
        let vm = map_catalog(&problems);
        let titles: Vec<_> = vm.buckets.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Statics", "Impulse and Momentum", "Work and Energy"]);
        assert_eq!(vm.buckets[0].problems[0].label, "Equilibrium");
        assert_eq!(vm.buckets[1].problems[0].label, "Impulse");
        assert_eq!(vm.buckets[2].problems[0].label, "Problem 161");
    }

    #[test]
    fn every_lecture_topic_is_offered() {
        let vm = map_catalog(&[]);
        assert!(vm.buckets.is_empty());
        assert_eq!(vm.lectures.len(), 4);
        assert_eq!(vm.lectures[0].label, "K_2.2 Projectile Motion");
    }
}
