extern crate self as lithoage;

#[macro_use]
mod macros;
mod api;
mod pipeline;
mod resolve;
mod stages;

pub mod dataset;

pub use api::{NormalizeReport, StageTrace, normalize, normalize_opt, normalize_verbose};

// --- Internal types ---------------------------------------------------------

/// A single rewrite stage in the normalization pipeline: a name and a pure
/// text transform. `apply` returning `None` means the stage did not fire and
/// the working text passes through unchanged.
///
/// Stages run strictly in the order `stages::get()` lists them; several of
/// them depend on the rewrites of earlier stages (the mega-annum stage, for
/// example, consumes the averaged output of the range stages).
pub(crate) struct Stage {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).field("apply", &"<function>").finish()
    }
}
