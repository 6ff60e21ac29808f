use super::error::Result;
use super::hmm::{Tag, Word, HMM};
use super::trace::Trace;
use super::{run_recurrence, Recurrence};

pub struct Viterbi;

impl Recurrence for Viterbi {
    fn name(&self) -> &'static str {
        "viterbi"
    }

    // Strict comparison: an equal contribution keeps the earlier value.
    fn combine(&self, acc: f32, contribution: f32) -> f32 {
        if contribution > acc {
            contribution
        } else {
            acc
        }
    }
}

/// Most likely tag of each position in `sequence`, together with the trace of
/// best-path scores.
///
/// Decoding does not backtrack: each position keeps the tag with the highest
/// score in its own trace row.
pub fn most_likely_tags(hmm: &HMM, sequence: &[Word]) -> Result<(Vec<Tag>, Trace)> {
    let trace = run_recurrence(hmm, &Viterbi, sequence)?;
    let tags = trace.best_tags()?;
    tracing::debug!(len = tags.len(), "most likely tags decoded");
    Ok((tags, trace))
}
