// ordbok-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use ordbok_core::Alphabet;
use ordbok_core::alphabet::normalize;
use ordbok_dict::DictionaryConfig;
use ordbok_dict::handle::SpellChecker;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Word list file name looked up in each search directory.
pub const DICT_FILE: &str = "ordbok.txt";

/// Environment variable naming a dictionary file or directory.
pub const DICT_PATH_ENV: &str = "ORDBOK_DICT_PATH";

/// Locate the word list.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory containing `ordbok.txt`)
/// 2. `ORDBOK_DICT_PATH` environment variable (same rules)
/// 3. `~/.ordbok`
/// 4. `/usr/share/ordbok`
/// 5. Current working directory
pub fn find_dictionary(dict_path: Option<&str>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
        let in_dir = candidate.join(DICT_FILE);
        if in_dir.is_file() {
            return Ok(in_dir);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of paths to search for the word list.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".ordbok"));
    }

    paths.push(PathBuf::from("/usr/share/ordbok"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Read a word list: every whitespace-separated token is one word, in file
/// order.
pub fn read_words(path: &Path) -> Result<Vec<String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(split_words(&text))
}

fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Load a JSON dictionary config, or the defaults when no path is given.
pub fn load_config(config_path: Option<&str>) -> Result<DictionaryConfig, String> {
    let Some(path) = config_path else {
        return Ok(DictionaryConfig::default());
    };
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    parse_config(&text).map_err(|e| format!("invalid config {path}: {e}"))
}

fn parse_config(text: &str) -> Result<DictionaryConfig, String> {
    let config: DictionaryConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Find the word list, load the config and build a SpellChecker.
pub fn load_checker(
    dict_path: Option<&str>,
    config_path: Option<&str>,
) -> Result<SpellChecker, String> {
    let config = load_config(config_path)?;
    let path = find_dictionary(dict_path)?;
    let words = read_words(&path)?;
    info!(path = %path.display(), words = words.len(), "loading dictionary");
    SpellChecker::from_words(&words, config)
        .map_err(|e| format!("failed to build dictionary: {e}"))
}

/// A line of interactive input after screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Blank input; nothing to check.
    Empty,
    /// Input holding characters outside the alphabet.
    NotAWord,
    /// A normalized word made only of alphabet letters.
    Word(String),
}

/// Lowercase and trim `input`, then accept it only if every character is a
/// letter of `alphabet`.
pub fn screen_query(input: &str, alphabet: &Alphabet) -> Query {
    let word = normalize(input);
    if word.is_empty() {
        Query::Empty
    } else if alphabet.is_word(&word) {
        Query::Word(word)
    } else {
        Query::NotAWord
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `level` takes precedence over `RUST_LOG`; with neither, only warnings
/// and errors are shown.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "-d", "--dict-path")
}

/// Parse a `LONG=VALUE`, `LONG VALUE` or `SHORT VALUE` option.
///
/// Returns `(value, remaining_args)`. The last occurrence wins. A flag with
/// no following value is fatal.
pub fn parse_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let prefix = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(prefix.as_str()) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
