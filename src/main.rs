use anyhow::{Context, Result};

mod tagger;
mod utils;

use tagger::hmm::{Tag, Word, HMM};
use tagger::forward::{posterior_tag_probability, sequence_probability};
use tagger::trace::Trace;
use tagger::viterbi::most_likely_tags;

fn question_b(hmm: &HMM, sequence: &[Word]) -> Result<(f32, Trace)> {
    println!("---------- QUESTION 1 b) ----------");
    let (prob, trace) = sequence_probability(hmm, sequence).context("question 1 b)")?;
    println!("The probability for {} is: {}", utils::join_names(sequence), prob);
    Ok((prob, trace))
}

fn question_c(hmm: &HMM, sequence: &[Word], prob: f32, trace: &Trace) -> Result<()> {
    println!();
    println!("---------- QUESTION 1 c) ----------");
    let noun = posterior_tag_probability(hmm, Tag::Noun, prob, trace).context("question 1 c)")?;
    println!("The probability of having a noun after {} is: {}", utils::join_names(sequence), noun);
    Ok(())
}

fn question_d(hmm: &HMM, sequence: &[Word]) -> Result<()> {
    println!();
    println!("---------- QUESTION 1 d) ----------");
    let (tags, _) = most_likely_tags(hmm, sequence).context("question 1 d)")?;
    println!("The most likey tags for {} is: {}", utils::join_names(sequence), utils::join_names(&tags));
    Ok(())
}

fn main() -> Result<()> {
    let matches = utils::cli().get_matches();
    let config = utils::Config::from_matches(&matches);

    tracing::subscriber::set_global_default(utils::subscriber(&config, std::io::stdout))?;

    let hmm = HMM::tagging_model().context("building the tagging model")?;
    let sequence = [Word::Not, Word::That, Word::Good];

    let (prob, trace) = question_b(&hmm, &sequence)?;
    question_c(&hmm, &sequence, prob, &trace)?;
    question_d(&hmm, &sequence)?;
    Ok(())
}
