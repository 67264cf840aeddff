// ordbok-spell: Interactive spell checker.
//
// Loads a word list, then reads words from stdin (one per line) until `q`
// or end of input. Each word is lowercased; input containing anything but
// letters of the configured alphabet is rejected. For a misspelled word the
// valid edit-distance-1 suggestions are listed together with how the
// candidates were classified.
//
// Usage:
//   ordbok-spell [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Word list file, or directory containing ordbok.txt
//   -c, --config FILE      JSON dictionary configuration
//   --log-level LEVEL      Log filter (overrides RUST_LOG)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use ordbok_cli::Query;
use ordbok_core::alphabet::normalize;
use ordbok_dict::handle::SpellChecker;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ordbok_cli::parse_dict_path(&args);
    let (config_path, args) = ordbok_cli::parse_option(&args, "-c", "--config");
    let (log_level, args) = ordbok_cli::parse_option(&args, "--log-level", "--log-level");

    if ordbok_cli::wants_help(&args) {
        println!("ordbok-spell: Interactive spell checker.");
        println!();
        println!("Usage: ordbok-spell [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word and exits.");
        println!("Otherwise prompts for words on stdin; enter 'q' to quit.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list file, or directory containing ordbok.txt");
        println!("  -c, --config FILE      JSON dictionary configuration");
        println!("  --log-level LEVEL      Log filter (overrides RUST_LOG)");
        println!("  -h, --help             Print this help");
        return;
    }

    ordbok_cli::init_logging(log_level.as_deref());

    let checker = ordbok_cli::load_checker(dict_path.as_deref(), config_path.as_deref())
        .unwrap_or_else(|e| ordbok_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.is_empty() {
        for word in &args {
            check_input(&checker, word, &mut out);
        }
        return;
    }

    let _ = writeln!(out, "Welcome to the ordbok spell checker!");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let _ = write!(out, "Enter a word to check ('q' to quit):\n> ");
        let _ = out.flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
            None => break,
        };
        let word = normalize(&line);
        if word == "q" {
            let _ = writeln!(out, "Signing off.");
            break;
        }
        check_input(&checker, &word, &mut out);
    }
}

/// Check one raw input token and print the result.
fn check_input(checker: &SpellChecker, input: &str, out: &mut impl Write) {
    let word = match ordbok_cli::screen_query(input, checker.alphabet()) {
        Query::Word(word) => word,
        Query::Empty => return,
        Query::NotAWord => {
            let _ = writeln!(out, "\"{}\" is not a word.", input.trim());
            return;
        }
    };

    let report = match checker.check(&word) {
        Ok(report) => report,
        Err(e) => {
            let _ = writeln!(out, "error: {e}");
            return;
        }
    };

    if report.is_correct() {
        let _ = writeln!(out, "The word \"{word}\" is spelled correctly.");
        return;
    }

    let _ = writeln!(out, "The word \"{word}\" is not spelled correctly.");
    let _ = writeln!(out, "Suggestions:");
    for suggestion in &report.suggestions {
        let _ = writeln!(out, "- {suggestion}");
    }
    let _ = writeln!(out, "Suggestions found: {}", report.counts.valid);
    let _ = writeln!(out, "Invalid suggestions found: {}", report.counts.false_positive);
    let _ = writeln!(out, "Non-words found: {}", report.counts.hash_miss);
    let _ = writeln!(
        out,
        "Time used to find suggestions: {:.3} seconds",
        report.elapsed.as_secs_f64()
    );
}
