use ndarray::{arr1, arr2, s, Array1, Array2, ArrayView1};
use std::fmt;

use super::error::{Result, TaggerError};

pub const NSTATES: usize = 4;
pub const NOBS: usize = 5;

const TOLERANCE: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Conjunction = 0,
    Noun = 1,
    Verb = 2,
    Adjective = 3,
}

impl Tag {
    pub const ALL: [Tag; NSTATES] = [Tag::Conjunction, Tag::Noun, Tag::Verb, Tag::Adjective];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Tag> {
        Tag::ALL.get(idx).copied()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Conjunction => "Conjunction",
            Tag::Noun => "Noun",
            Tag::Verb => "Verb",
            Tag::Adjective => "Adjective",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    That = 0,
    Is = 1,
    Not = 2,
    It = 3,
    Good = 4,
}

impl Word {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Word::That => "That",
            Word::Is => "Is",
            Word::Not => "Not",
            Word::It => "It",
            Word::Good => "Good",
        };
        f.write_str(name)
    }
}

pub const INIT_PROB: [f32; NSTATES] = [1.0 / 7.0, 1.0 / 3.0, 3.0 / 7.0, 2.0 / 21.0];

pub const TRANSMAT: [[f32; NSTATES]; NSTATES] = [
    [1.0 / 6.0, 1.0 / 2.0, 1.0 / 6.0, 1.0 / 6.0],
    [1.0 / 9.0, 2.0 / 9.0, 4.0 / 9.0, 2.0 / 9.0],
    [1.0 / 10.0, 4.0 / 10.0, 4.0 / 10.0, 1.0 / 10.0],
    [1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0],
];

pub const EMISSIONMAT: [[f32; NOBS]; NSTATES] = [
    [3.0 / 7.0, 1.0 / 7.0, 1.0 / 7.0, 1.0 / 7.0, 1.0 / 7.0],
    [4.0 / 11.0, 1.0 / 11.0, 2.0 / 11.0, 3.0 / 11.0, 1.0 / 11.0],
    [2.0 / 13.0, 7.0 / 13.0, 2.0 / 13.0, 1.0 / 13.0, 1.0 / 13.0],
    [1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 2.0 / 6.0],
];

/// Part-of-speech HMM: `a` is the transition matrix (from, to), `b` the
/// emission matrix (tag, word) and `pi` the initial distribution.
///
/// Fields are private and there is no mutating method: once built, the
/// tables stay as they were validated.
#[derive(Debug, Clone)]
pub struct HMM {
    a: Array2<f32>,
    b: Array2<f32>,
    pi: Array1<f32>,
}

impl HMM {

    pub fn new(a: Array2<f32>, b: Array2<f32>, pi: Array1<f32>) -> Result<Self> {
        if a.dim() != (NSTATES, NSTATES) {
            return Err(TaggerError::InvalidModel(format!("transition matrix must be {}x{}, got {:?}", NSTATES, NSTATES, a.dim())));
        }
        if b.dim() != (NSTATES, NOBS) {
            return Err(TaggerError::InvalidModel(format!("emission matrix must be {}x{}, got {:?}", NSTATES, NOBS, b.dim())));
        }
        if pi.len() != NSTATES {
            return Err(TaggerError::InvalidModel(format!("initial distribution must have {} entries, got {}", NSTATES, pi.len())));
        }

        check_distribution("initial distribution", pi.view())?;
        for (state, row) in a.outer_iter().enumerate() {
            check_distribution(&format!("transition row {}", state), row)?;
        }
        for (state, row) in b.outer_iter().enumerate() {
            check_distribution(&format!("emission row {}", state), row)?;
        }
        Ok(Self { a, b, pi })
    }

    /// The fixed Conjunction/Noun/Verb/Adjective model over That/Is/Not/It/Good.
    pub fn tagging_model() -> Result<Self> {
        let hmm = HMM::new(arr2(&TRANSMAT), arr2(&EMISSIONMAT), arr1(&INIT_PROB))?;
        tracing::debug!(nstates = hmm.nstates(), nobs = hmm.nobs(), "tagging model ready");
        Ok(hmm)
    }

    pub fn nstates(&self) -> usize {
        self.a.nrows()
    }

    pub fn nobs(&self) -> usize {
        self.b.ncols()
    }

    pub fn init(&self, tag: Tag) -> f32 {
        self.pi[tag.index()]
    }

    pub fn transition(&self, state_from: Tag, state_to: Tag) -> f32 {
        self.a[[state_from.index(), state_to.index()]]
    }

    /// Column of the transition matrix: every `P(state_to | from)`.
    pub fn transitions_to(&self, state_to: Tag) -> ArrayView1<'_, f32> {
        self.a.slice(s![.., state_to.index()])
    }

    pub fn emission(&self, state: Tag, obs: Word) -> f32 {
        self.b[[state.index(), obs.index()]]
    }

    /// Emission entry addressed by a raw column number. The recurrences use
    /// it with the position in the sequence, not the observed word.
    pub fn emission_at_column(&self, state: Tag, column: usize) -> f32 {
        self.b[[state.index(), column]]
    }

}

fn check_distribution(what: &str, row: ArrayView1<'_, f32>) -> Result<()> {
    if row.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(TaggerError::InvalidModel(format!("{} has a negative or non-finite entry", what)));
    }
    let d = row.sum() - 1.0;
    if d.abs() > TOLERANCE {
        return Err(TaggerError::InvalidModel(format!("{} sums to {} instead of 1", what, row.sum())));
    }
    Ok(())
}
