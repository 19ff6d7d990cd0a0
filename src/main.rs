#![forbid(unsafe_code)]

use clap::Parser;

use perfcmp::cli::{self, CompareCli};

#[cfg(feature = "tracing")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let env = std::env::var("PERFCMP_LOG").unwrap_or_else(|_| {
        if verbose { "perfcmp=debug".to_string() } else { "perfcmp=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    let opts = CompareCli::parse();
    #[cfg(feature = "tracing")]
    init_tracing(opts.verbose);

    if let Err(e) = cli::run(&opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
