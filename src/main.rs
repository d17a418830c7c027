#![forbid(unsafe_code)]

//! pwqgen prints passphrases built from a wordlist.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pwqgen::{
    ByteSource, Generator, KeyedByteStream, PassphraseConfig, SeparatorAlphabet, SystemRandom,
    Wordset, DEFAULT_WORDS,
};

/// Generate memorable passphrases
#[derive(Parser, Debug)]
#[command(name = "pwqgen")]
#[command(version)]
struct Args {
    /// Wordlist file, one word per line, a power of two words long
    #[arg(long, env = "PWQGEN_WORDLIST")]
    wordlist: PathBuf,

    /// Number of words per passphrase
    #[arg(short, long, default_value_t = DEFAULT_WORDS)]
    words: usize,

    /// Separator characters to choose from (count must be a power of two)
    #[arg(long, conflicts_with = "numeric")]
    separators: Option<SeparatorAlphabet>,

    /// Only use digits as separators
    #[arg(long)]
    numeric: bool,

    /// Never capitalize words
    #[arg(long)]
    no_capitalize: bool,

    /// Number of passphrases to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Derive passphrases reproducibly from this string instead of system randomness
    #[arg(long)]
    seed: Option<String>,

    /// Secret key for --seed
    #[arg(long, env = "PWQGEN_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let count = args.count;
    let (generator, mut source) = build(args)?;

    info!(
        entropy_bits = generator.entropy_bits(),
        count, "generating passphrases"
    );
    for _ in 0..count {
        let phrase = generator.generate_with(source.as_mut())?;
        println!("{}", phrase);
    }
    Ok(())
}

/// build turns the parsed arguments into a generator and the byte source it should draw from.
fn build(args: Args) -> Result<(Generator, Box<dyn ByteSource>)> {
    let wordset = Wordset::load(&args.wordlist)?;
    let separators = match (args.separators, args.numeric) {
        (Some(separators), _) => separators,
        (None, true) => SeparatorAlphabet::numeric(),
        (None, false) => SeparatorAlphabet::default(),
    };
    let config = PassphraseConfig::default()
        .with_words(args.words)
        .with_separators(separators)
        .with_capitalize(!args.no_capitalize);
    let generator = Generator::new(config, wordset).context("invalid passphrase settings")?;

    let source: Box<dyn ByteSource> = match (args.seed, args.key) {
        (Some(seed), Some(key)) => {
            info!("using keyed byte stream, output is reproducible");
            Box::new(KeyedByteStream::new(seed, key))
        }
        (Some(_), None) => bail!("--seed needs a key, pass --key or set PWQGEN_KEY"),
        (None, key) => {
            if key.is_some() {
                warn!("key given without --seed, ignoring it");
            }
            debug!("using system randomness");
            Box::new(SystemRandom)
        }
    };
    Ok((generator, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    // wordlist writes a four word list to a temporary file.
    fn wordlist() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "adam\naction\ncider\nuproar").unwrap();
        file
    }

    // parse runs the argument parser with the given wordlist and extra flags.
    fn parse(file: &NamedTempFile, extra: &[&str]) -> std::result::Result<Args, clap::Error> {
        let path = file.path().to_string_lossy().into_owned();
        let mut argv = vec!["pwqgen".to_string(), "--wordlist".to_string(), path];
        argv.extend(extra.iter().map(|arg| arg.to_string()));
        Args::try_parse_from(argv)
    }

    #[test]
    // the defaults give three capitalized words with the default separators.
    fn check_defaults() {
        let file = wordlist();
        let (generator, _) = build(parse(&file, &[]).unwrap()).unwrap();
        assert_eq!(generator.config(), &PassphraseConfig::default());
        assert_eq!(generator.wordset().len(), 4);
    }

    #[test]
    // flags map onto the matching config fields.
    fn check_flags_reach_config() {
        let file = wordlist();
        let args = parse(&file, &["--words", "5", "--numeric", "--no-capitalize"]).unwrap();
        let (generator, mut source) = build(args).unwrap();
        let config = generator.config();
        assert_eq!(config.words, 5);
        assert_eq!(config.separators, SeparatorAlphabet::numeric());
        assert!(!config.capitalize);

        let phrase = generator.generate_with(source.as_mut()).unwrap();
        assert_eq!(phrase, phrase.to_lowercase());

        let args = parse(&file, &["--separators", "+/"]).unwrap();
        let (generator, _) = build(args).unwrap();
        assert_eq!(generator.config().separators.to_string(), "+/");
    }

    #[test]
    // separator sets are validated while parsing, and --separators cannot be mixed with --numeric.
    fn check_separator_arguments() {
        let file = wordlist();
        let err = parse(&file, &["--separators", "123"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let err = parse(&file, &["--separators", "12", "--numeric"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    // a seed without a key is refused, and zero words fails validation.
    fn check_rejected_settings() {
        let file = wordlist();
        let mut args = parse(&file, &["--seed", "bob"]).unwrap();
        args.key = None;
        let err = build(args).err().unwrap();
        assert!(err.to_string().contains("--seed needs a key"));

        let args = parse(&file, &["--words", "0"]).unwrap();
        let err = build(args).err().unwrap();
        assert!(format!("{:#}", err).contains("n_words"));
    }

    #[test]
    // a seed and key select the keyed stream, so two builds print the same passphrase.
    fn check_keyed_output_repeats() {
        let file = wordlist();
        let flags = ["--seed", "bob", "--key", "terribly secret key"];
        let (generator, mut first) = build(parse(&file, &flags).unwrap()).unwrap();
        let (_, mut second) = build(parse(&file, &flags).unwrap()).unwrap();
        assert_eq!(
            generator.generate_with(first.as_mut()).unwrap(),
            generator.generate_with(second.as_mut()).unwrap()
        );
    }

    #[test]
    // a missing wordlist names the file in the error.
    fn check_missing_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let args = Args::try_parse_from(["pwqgen", "--wordlist", path.to_str().unwrap()]).unwrap();
        let err = build(args).err().unwrap();
        assert!(err.to_string().contains("unable to read wordlist"));
    }
}
