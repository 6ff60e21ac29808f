use super::error::{Result, TaggerError};
use super::hmm::{Tag, Word, HMM};
use super::trace::Trace;
use super::{run_recurrence, Recurrence};

pub struct Forward;

impl Recurrence for Forward {
    fn name(&self) -> &'static str {
        "forward"
    }

    fn combine(&self, acc: f32, contribution: f32) -> f32 {
        acc + contribution
    }
}

/// Probability of observing `sequence`, with the forward trace kept for
/// `posterior_tag_probability`.
pub fn sequence_probability(hmm: &HMM, sequence: &[Word]) -> Result<(f32, Trace)> {
    let trace = run_recurrence(hmm, &Forward, sequence)?;
    let prob = match trace.last() {
        Some(last) => last.iter().fold(0.0f32, |acc, p| acc + p),
        None => return Err(TaggerError::InvalidInput(String::from("empty sequence"))),
    };
    tracing::debug!(len = sequence.len(), prob = %prob, "sequence probability");
    Ok((prob, trace))
}

/// Probability of `tag` at the position right after the traced sequence.
///
/// Every term of the sum reads the score of `tag` itself in the last trace
/// row, weighted by the transition from each tag into `tag`.
pub fn posterior_tag_probability(hmm: &HMM, tag: Tag, seq_prob: f32, trace: &Trace) -> Result<f32> {
    let last = trace
        .last()
        .ok_or_else(|| TaggerError::InvalidInput(String::from("empty trace")))?;
    if seq_prob == 0.0 || !seq_prob.is_finite() {
        return Err(TaggerError::NumericDomain(format!("cannot condition on a sequence probability of {}", seq_prob)));
    }

    let ratio = last[tag.index()] / seq_prob;
    let prob = hmm.transitions_to(tag).iter().fold(0.0f32, |acc, a| acc + a * ratio);
    tracing::debug!(tag = %tag, prob = %prob, "posterior tag probability");
    Ok(prob)
}
