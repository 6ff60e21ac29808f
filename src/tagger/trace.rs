use ndarray::{aview1, Array2, ArrayView1, Axis};
use ndarray_stats::QuantileExt;

use super::error::{Result, TaggerError};
use super::hmm::{Tag, NSTATES};

/// Per-position tag scores of one recurrence, row `t` aligned with the `t`-th
/// observation. Rows are only ever appended.
#[derive(Debug, Clone)]
pub struct Trace {
    scores: Array2<f32>,
}

impl Trace {

    pub fn new() -> Self {
        Self { scores: Array2::zeros((0, NSTATES)) }
    }

    pub fn push(&mut self, row: &[f32]) -> Result<()> {
        if row.len() != NSTATES {
            return Err(TaggerError::InvalidInput(format!("trace row has {} scores, expected {}", row.len(), NSTATES)));
        }
        self.scores
            .push_row(aview1(row))
            .map_err(|e| TaggerError::InvalidInput(format!("cannot append trace row: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.scores.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row(&self, t: usize) -> ArrayView1<'_, f32> {
        self.scores.row(t)
    }

    pub fn last(&self) -> Option<ArrayView1<'_, f32>> {
        if self.is_empty() {
            None
        } else {
            Some(self.scores.row(self.len() - 1))
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f32>> + '_ {
        self.scores.axis_iter(Axis(0))
    }

    /// Independent argmax of every row; within a row the lowest index wins
    /// ties.
    pub fn best_tags(&self) -> Result<Vec<Tag>> {
        self.rows().map(best_tag).collect()
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

fn best_tag(row: ArrayView1<'_, f32>) -> Result<Tag> {
    let idx = row.argmax()?;
    Tag::from_index(idx).ok_or_else(|| TaggerError::InvalidInput(format!("no tag with index {}", idx)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_appended_in_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());
        assert!(trace.last().is_none());

        trace.push(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        trace.push(&[0.5, 0.6, 0.7, 0.8]).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.row(0).to_vec(), vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(trace.last().unwrap().to_vec(), vec![0.5, 0.6, 0.7, 0.8]);
        assert_eq!(trace.rows().count(), 2);
    }

    #[test]
    fn rejects_rows_of_wrong_width() {
        let mut trace = Trace::new();
        assert!(matches!(trace.push(&[0.1, 0.2, 0.3]), Err(TaggerError::InvalidInput(_))));
        assert!(matches!(trace.push(&[0.1, 0.2, 0.3, 0.4, 0.5]), Err(TaggerError::InvalidInput(_))));
        assert!(trace.is_empty());
    }

    #[test]
    fn ties_go_to_the_lowest_tag() {
        let mut trace = Trace::new();
        trace.push(&[0.1, 0.4, 0.2, 0.4]).unwrap();
        trace.push(&[0.3, 0.3, 0.3, 0.3]).unwrap();
        trace.push(&[0.0, 0.1, 0.5, 0.5]).unwrap();
        assert_eq!(trace.best_tags().unwrap(), vec![Tag::Noun, Tag::Conjunction, Tag::Verb]);
    }

    #[test]
    fn nan_scores_cannot_be_ranked() {
        let mut trace = Trace::new();
        trace.push(&[0.1, f32::NAN, 0.2, 0.3]).unwrap();
        assert!(matches!(trace.best_tags(), Err(TaggerError::Ranking(_))));
    }
}
