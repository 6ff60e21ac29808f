pub mod error;
pub mod hmm;
pub mod trace;
pub mod forward;
pub mod viterbi;

use hmm::{Tag, Word, HMM, NSTATES, NOBS};
use trace::Trace;
use error::{Result, TaggerError};

/// How a recurrence folds the predecessor contributions of one cell into the
/// carried score. Forward sums them, Viterbi keeps the largest.
pub trait Recurrence {
    fn name(&self) -> &'static str;
    fn combine(&self, acc: f32, contribution: f32) -> f32;
}

/// Shared skeleton of the forward and Viterbi recurrences.
///
/// Self-transitions never contribute: the carried term for tag `j` is the
/// previous score of `j` times the emission of `j` at the column numbered by
/// the position, and only `k != j` predecessors go through the transition
/// matrix.
pub fn run_recurrence<R: Recurrence>(hmm: &HMM, recurrence: &R, sequence: &[Word]) -> Result<Trace> {
    if sequence.is_empty() {
        return Err(TaggerError::InvalidInput(String::from("empty sequence")));
    }
    if sequence.len() > NOBS {
        return Err(TaggerError::InvalidInput(format!(
            "sequence of {} words is longer than the {} emission columns",
            sequence.len(),
            NOBS
        )));
    }

    let mut trace = Trace::new();

    let mut row = [0.0f32; NSTATES];
    for tag in Tag::ALL {
        let i = tag.index();
        row[i] = hmm.init(tag) * hmm.emission(tag, sequence[0]);
        tracing::debug!(recurrence = recurrence.name(), position = 0, tag = %tag, score = %row[i]);
    }
    trace.push(&row)?;

    for t in 1..sequence.len() {
        let previous = trace.row(t - 1);
        for state_to in Tag::ALL {
            let j = state_to.index();
            let mut score = previous[j] * hmm.emission_at_column(state_to, t);
            for state_from in Tag::ALL {
                let k = state_from.index();
                if k == j {
                    continue;
                }
                score = recurrence.combine(score, hmm.transition(state_from, state_to) * previous[k]);
            }
            row[j] = score * hmm.emission(state_to, sequence[t]);
            tracing::debug!(recurrence = recurrence.name(), position = t, tag = %state_to, score = %row[j]);
        }
        trace.push(&row)?;
    }
    Ok(trace)
}
