use std::io::{stderr, stdin, stdout};

use clap::Parser;
use connect_four::Presenter;
use connect_four_cli::{JsonPresenter, Session, TextPresenter};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Columns to play in order, e.g. "3,3,4". Without them, commands are read
    /// from stdin: "move <column>", "new", "show" and "quit"
    #[arg(value_delimiter = ',', allow_negative_numbers = true)]
    moves: Vec<i32>,

    /// Skip illegal moves instead of stopping at the first one
    #[arg(short, long, default_value_t = false)]
    keep_going: bool,

    /// Print every state as a JSON line instead of drawing the board
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if args.json {
        run(&args, JsonPresenter::new(stdout().lock()))
    } else {
        run(&args, TextPresenter::new(stdout().lock()))
    }
}

fn run<P: Presenter>(args: &Args, presenter: P) -> anyhow::Result<()> {
    let mut session = Session::new(presenter);

    if args.moves.is_empty() {
        return session.run_interactive(stdin().lock(), stderr());
    }

    let summary = session.run_script(&args.moves, args.keep_going)?;
    info!(
        accepted = summary.accepted,
        rejected = summary.rejected.len(),
        "Script finished"
    );
    // Any illegal move makes the exit code non-zero
    if let Some(&(move_idx, err)) = summary.rejected.first() {
        return Err(anyhow::Error::new(err).context(format!(
            "Move {} (column {}) was rejected",
            move_idx + 1,
            args.moves[move_idx]
        )));
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(stderr),
        )
        .with(filter)
        .init();
}
