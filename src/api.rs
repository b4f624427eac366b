use std::time::Duration;

use once_cell::sync::Lazy;

use crate::Stage;
use crate::pipeline::Pipeline;

static DEFAULT_STAGES: Lazy<Vec<Stage>> = Lazy::new(crate::stages::get);

/// Normalize a free-form geological age string to a signed year value.
///
/// Negative results are deep-time "years ago" magnitudes; small positive
/// results are absolute calendar years (years-before-present figures under
/// 80,000 years are converted by subtracting from the year 2000). `None`
/// means no usable number survived the rewrite pipeline.
///
/// Pure and deterministic: the same input always yields the same output, and
/// the function never panics on malformed text.
///
/// # Example
/// ```
/// use lithoage::normalize;
///
/// assert_eq!(normalize("about 400-750 yr"), Some(1425));
/// assert_eq!(normalize("2.5 Ma"), Some(-2500000));
/// assert_eq!(normalize("A.D. 1200"), Some(1200));
/// assert_eq!(normalize("no age given"), None);
/// ```
pub fn normalize(text: &str) -> Option<i64> {
    Pipeline::new(&DEFAULT_STAGES).run(text)
}

/// [`normalize`] lifted over absent input: `None` in, `None` out.
pub fn normalize_opt(text: Option<&str>) -> Option<i64> {
    normalize(text?)
}

/// Trace entry for one rewrite stage, as exposed by [`normalize_verbose`].
#[derive(Debug, Clone)]
pub struct StageTrace {
    /// Name of the stage.
    pub stage: String,
    /// Working text after the stage ran.
    pub output: String,
    /// Whether the stage rewrote anything.
    pub changed: bool,
    /// Time spent in the stage.
    pub duration: Duration,
}

/// Result from [`normalize_verbose`].
///
/// Compact by design: enough to see which stage rewrote the text into what,
/// without exposing pipeline internals.
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    /// The original input text.
    pub text: String,
    /// The normalized value, if one was recovered.
    pub value: Option<i64>,
    /// The working text after the last rewrite stage.
    pub final_text: String,
    /// Per-stage trace, in execution order.
    pub stages: Vec<StageTrace>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Normalize `text` and return a per-stage rewrite trace alongside the value.
///
/// Useful for debugging why a particular string did (or did not) produce a
/// number. The plain [`normalize`] path does not allocate these traces.
pub fn normalize_verbose(text: &str) -> NormalizeReport {
    let run = Pipeline::new(&DEFAULT_STAGES).run_with_trace(text);

    NormalizeReport {
        text: text.to_string(),
        value: run.value,
        final_text: run.final_text,
        stages: run
            .passes
            .into_iter()
            .map(|p| StageTrace {
                stage: p.stage.to_string(),
                output: p.output,
                changed: p.changed,
                duration: p.duration,
            })
            .collect(),
        elapsed: run.total,
    }
}
