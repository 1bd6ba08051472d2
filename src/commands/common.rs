use clap::Parser;
use std::ffi::OsString;

/// Joins captured positional words with single spaces.
pub fn join_words(words: &[String]) -> String {
    words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses `args` into `P`. Help and version requests print and exit 0; any
/// other parse failure prints the usage error and exits 1.
pub fn parse_cli_args<P, I, T>(args: I) -> P
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
