use services::dto::QuizResult;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub id: u64,
    pub title: String,
    pub score_str: String,
    pub passed: bool,
    pub taken_at_str: String,
}

impl From<&QuizResult> for ResultRowVm {
    fn from(result: &QuizResult) -> Self {
        Self {
            id: result.id,
            title: result.title().to_string(),
            score_str: format!("{:.0}%", result.score),
            passed: result.passed,
            taken_at_str: format_datetime(result.date_taken),
        }
    }
}

/// Totals shown above the results table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsOverviewVm {
    pub taken: usize,
    pub passed: usize,
    pub average_score: f64,
}

#[must_use]
pub fn map_result_rows(items: &[QuizResult]) -> Vec<ResultRowVm> {
    items.iter().map(ResultRowVm::from).collect()
}

#[must_use]
pub fn results_overview(items: &[QuizResult]) -> ResultsOverviewVm {
    if items.is_empty() {
        return ResultsOverviewVm::default();
    }
    let total: f64 = items.iter().map(|r| r.score).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_score = total / items.len() as f64;
    ResultsOverviewVm {
        taken: items.len(),
        passed: items.iter().filter(|r| r.passed).count(),
        average_score,
    }
}
