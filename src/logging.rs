use std::io::Write;

use log::LevelFilter;

/// Map `-v` occurrences to a level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install an env_logger on stderr. `RUST_LOG` overrides the verbosity flag.
pub fn init_logger(verbose: u8) {
    env_logger::Builder::default()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format(|buf, record| {
            let target = record.target();
            if target != record.module_path().unwrap_or("unknown") {
                writeln!(buf, "{} [{}]: {}", record.level(), target, record.args())
            } else {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
        })
        .target(env_logger::Target::Stderr)
        .init();
}
