use clap::{Arg, ArgMatches, Command};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::FmtSubscriber;

use std::fmt::Display;

/// Space separated names, e.g. `Not That Good`.
pub fn join_names<T: Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Only `-v` means anything; every other argument is accepted and ignored.
pub fn cli() -> Command<'static> {
    Command::new("HMM tagger")
        .version("0.1")
        .author("Alexandre Dubray <alexandre.dubray@uclouvain.be>")
        .about("Forward probability, next-tag posterior and Viterbi tags on a fixed part-of-speech HMM")
        .ignore_errors(true)
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("print every intermediate score of both recurrences")
            .takes_value(false))
        .arg(Arg::new("ignored")
            .multiple_values(true)
            .allow_hyphen_values(true)
            .hide(true))
}

/// Plain text events (no ANSI escapes) without timestamps or targets.
pub fn subscriber<W>(config: &Config, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish()
}

pub struct Config {
    verbose: bool,
}

impl Config {

    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self { verbose: matches.is_present("verbose") }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Intermediate scores are `debug` events, so they only show up in
    /// verbose mode.
    pub fn log_level(&self) -> Level {
        if self.is_verbose() {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::forward::sequence_probability;
    use crate::tagger::hmm::{Tag, Word, HMM};

    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config_from(args: &[&str]) -> Config {
        Config::from_matches(&cli().get_matches_from(args.iter().copied()))
    }

    fn logged(args: &[&str]) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(&config_from(args), move || writer.clone());
        let hmm = HMM::tagging_model().unwrap();
        tracing::subscriber::with_default(subscriber, || {
            sequence_probability(&hmm, &[Word::Not]).unwrap();
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn joins_with_single_spaces() {
        assert_eq!(join_names(&[Word::Not, Word::That, Word::Good]), "Not That Good");
        assert_eq!(join_names(&[Tag::Verb, Tag::Noun, Tag::Adjective]), "Verb Noun Adjective");
        assert_eq!(join_names::<Tag>(&[]), "");
    }

    #[test]
    fn verbose_flag() {
        let config = config_from(&["hmm-tagger", "-v"]);
        assert!(config.is_verbose());
        assert_eq!(config.log_level(), Level::DEBUG);

        let config = config_from(&["hmm-tagger"]);
        assert!(!config.is_verbose());
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        assert!(!config_from(&["hmm-tagger", "extra"]).is_verbose());
        assert!(!config_from(&["hmm-tagger", "-x"]).is_verbose());
        assert!(!config_from(&["hmm-tagger", "extra", "more"]).is_verbose());
        assert!(config_from(&["hmm-tagger", "-v", "extra"]).is_verbose());
    }

    #[test]
    fn verbose_scores_are_plain_f32_text() {
        let out = logged(&["hmm-tagger", "-v"]);
        assert!(!out.contains('\u{1b}'));
        // 1/7 * 1/7 in f32, not its f64 widening 0.020408164709806442
        assert!(out.contains("score=0.020408165"));
        assert!(!out.contains("0.020408164709806442"));
        assert!(out.contains("tag=Conjunction"));
    }

    #[test]
    fn quiet_without_verbose_flag() {
        let out = logged(&["hmm-tagger"]);
        assert!(!out.contains("score="));
    }
}
