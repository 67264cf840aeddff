// ordbok-stats: Print shape and filter statistics for a word list.
//
// Usage:
//   ordbok-stats [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Word list file, or directory containing ordbok.txt
//   -c, --config FILE      JSON dictionary configuration
//   -i, --interval N       Fill-rate window size (default: 30)
//   --json                 Print statistics as JSON
//   --log-level LEVEL      Log filter (overrides RUST_LOG)
//   -h, --help             Print help

use std::io::{self, Write};

const DEFAULT_INTERVAL: usize = 30;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ordbok_cli::parse_dict_path(&args);
    let (config_path, args) = ordbok_cli::parse_option(&args, "-c", "--config");
    let (interval, args) = ordbok_cli::parse_option(&args, "-i", "--interval");
    let (log_level, args) = ordbok_cli::parse_option(&args, "--log-level", "--log-level");

    if ordbok_cli::wants_help(&args) {
        println!("ordbok-stats: Print shape and filter statistics for a word list.");
        println!();
        println!("Usage: ordbok-stats [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list file, or directory containing ordbok.txt");
        println!("  -c, --config FILE      JSON dictionary configuration");
        println!("  -i, --interval N       Fill-rate window size (default: 30)");
        println!("  --json                 Print statistics as JSON");
        println!("  --log-level LEVEL      Log filter (overrides RUST_LOG)");
        println!("  -h, --help             Print this help");
        return;
    }

    let json = args.iter().any(|a| a == "--json");
    let interval: usize = match interval {
        Some(n) => n
            .parse()
            .unwrap_or_else(|_| ordbok_cli::fatal("invalid number for --interval")),
        None => DEFAULT_INTERVAL,
    };

    ordbok_cli::init_logging(log_level.as_deref());

    let checker = ordbok_cli::load_checker(dict_path.as_deref(), config_path.as_deref())
        .unwrap_or_else(|e| ordbok_cli::fatal(&e));
    let stats = checker
        .stats(interval)
        .unwrap_or_else(|e| ordbok_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let text = serde_json::to_string_pretty(&stats)
            .unwrap_or_else(|e| ordbok_cli::fatal(&e.to_string()));
        let _ = writeln!(out, "{text}");
        return;
    }

    let _ = writeln!(out, "Words in dictionary: {}", stats.size);
    let _ = writeln!(out, "Depth of the tree: {}", stats.depth);
    let _ = writeln!(out, "Nodes per depth:");
    for (i, count) in stats.depth_histogram.iter().enumerate() {
        let _ = writeln!(out, "- Depth of {}: {} nodes", i + 1, count);
    }
    match stats.average_depth {
        Some(avg) => {
            let _ = writeln!(out, "Average depth of nodes: {avg:.2}");
        }
        None => {
            let _ = writeln!(out, "Average depth of nodes: n/a");
        }
    }
    let _ = writeln!(
        out,
        "First word in dictionary: {}",
        stats.min.as_deref().unwrap_or("n/a")
    );
    let _ = writeln!(
        out,
        "Last word in dictionary: {}",
        stats.max.as_deref().unwrap_or("n/a")
    );
    let _ = writeln!(
        out,
        "Hash values generated: {} of {}",
        stats.set_bits, stats.filter_capacity
    );
    let _ = writeln!(out, "Fill rate of hash table at intervals of {interval}:");
    for (k, windows) in stats.fill_rate.iter().enumerate() {
        let _ = writeln!(out, "Intervals with fill rate of {k}: {windows}");
    }
}
