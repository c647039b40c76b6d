use clap::{Arg, Command};

mod context;
mod record;

use context::Context;

fn cli() -> Command {
    Command::new("roster")
        .about("personnel records")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .global(true)
                .help("records api base url"),
        )
        .subcommand(record::args())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();

    let context = Context::new(matches.get_one::<String>("endpoint"));

    match matches.subcommand() {
        Some(("record", submatches)) => Ok(record::handlers(submatches, &context).await?),
        _ => unreachable!(), // If all subcommands are defined above, anything else is unreachable
    }
}
