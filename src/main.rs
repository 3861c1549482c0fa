use clap::Parser;
use fingerbox::cli::{self, Cli};
use fingerbox::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.verbose)?;

    let stdout = std::io::stdout();
    cli::run(&args, &mut stdout.lock())
}
