use std::io;
use std::process;

use bstree::shell::{self, Settings};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Reads strings line by line, inserting each into a binary search tree and printing the
/// tree's shape. An empty line ends the session.
#[derive(Parser, Debug)]
#[command(name = "bstree", version, about)]
struct Cli {
    /// Character repeated once per level of depth in front of each value
    #[arg(short, long, default_value_t = '-')]
    marker: char,

    /// Don't print node heights after each insert
    #[arg(long)]
    no_heights: bool,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            marker: self.marker,
            show_heights: !self.no_heights,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = shell::run(stdin.lock(), stdout.lock(), &cli.settings()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Logs go to stderr so they don't interleave with the rendered tree.
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(?filter, "logging initialised");
}
