//! Pipeline runner.
//!
//! Applies the rewrite stages from `stages::get()` in order over an evolving
//! working string, then hands the final text to `resolve` for numeric
//! extraction. Two entry points:
//!
//! - [`Pipeline::run`]: the cheap path, no tracing.
//! - [`Pipeline::run_with_trace`]: records the text after every stage plus
//!   per-stage timings, for the verbose API and the CLI report.

use std::time::{Duration, Instant};

use crate::{Stage, resolve};

/// Trace entry for one stage: the working text after the stage ran, whether
/// it actually rewrote anything, and how long it took.
#[derive(Debug, Clone)]
pub(crate) struct StagePass {
    pub stage: &'static str,
    pub output: String,
    pub changed: bool,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub value: Option<i64>,
    pub final_text: String,
    pub passes: Vec<StagePass>,
    pub total: Duration,
}

pub(crate) struct Pipeline<'a> {
    stages: &'a [Stage],
}

impl<'a> Pipeline<'a> {
    pub fn new(stages: &'a [Stage]) -> Self {
        Pipeline { stages }
    }

    /// Run every rewrite stage in order and return the final working text.
    pub fn rewrite(&self, text: &str) -> String {
        let mut current = text.to_string();
        for stage in self.stages {
            if let Some(next) = (stage.apply)(&current) {
                current = next;
            }
        }
        current
    }

    pub fn run(&self, text: &str) -> Option<i64> {
        resolve::resolve(&self.rewrite(text))
    }

    pub fn run_with_trace(&self, text: &str) -> RunResult {
        let started = Instant::now();

        let mut current = text.to_string();
        let mut passes = Vec::with_capacity(self.stages.len());

        for stage in self.stages {
            let stage_started = Instant::now();
            let next = (stage.apply)(&current);
            let duration = stage_started.elapsed();

            let changed = next.as_deref().is_some_and(|n| n != current);
            if let Some(next) = next {
                current = next;
            }

            passes.push(StagePass { stage: stage.name, output: current.clone(), changed, duration });
        }

        let value = resolve::resolve(&current);
        RunResult { value, final_text: current, passes, total: started.elapsed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_and_plain_run_agree() {
        let stages = crate::stages::get();
        let pipeline = Pipeline::new(&stages);

        for input in ["about 400-750 yr", "2.5 ma", "A.D. 1200", ""] {
            let traced = pipeline.run_with_trace(input);
            assert_eq!(traced.value, pipeline.run(input), "trace/run mismatch for '{input}'");
            assert_eq!(traced.passes.len(), stages.len());
        }
    }

    #[test]
    fn noop_stages_are_marked_unchanged() {
        let stages = crate::stages::get();
        let traced = Pipeline::new(&stages).run_with_trace("already clean");

        let era = traced.passes.iter().find(|p| p.stage == "era marker (a.d.)").unwrap();
        assert!(!era.changed);
        assert_eq!(traced.final_text, "already clean");
    }
}
