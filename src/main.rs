use pokemon_duel::{run, CliOptions, Command};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: pokemon-duel [--config config.json] <command>\n\
         \n\
         Commands:\n  \
           demo [--seed N] [--team-size N]            play an AI-vs-AI match and print the log\n  \
           matrix [--sims N] [--seed N] [--output P]  write the popular-team win-rate CSV\n  \
           species                                     list the built-in catalog"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut config_path = None;
    let mut command_name = None;
    let mut seed = 0u64;
    let mut team_size = None;
    let mut sims_per_cell = 100usize;
    let mut output_path = PathBuf::from("matrix.csv");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--config requires a path (e.g. --config config.json)")
                })?);
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--team-size" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--team-size requires a number"))?;
                team_size = Some(val.parse()?);
            }
            "--sims" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sims requires a number"))?;
                sims_per_cell = val.parse()?;
            }
            "--output" => {
                output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output matrix.csv)")
                })?;
            }
            "--help" | "-h" => usage(),
            "demo" | "matrix" | "species" if command_name.is_none() => {
                command_name = Some(arg.clone());
            }
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    let command = match command_name.as_deref() {
        Some("demo") => Command::Demo { seed, team_size },
        Some("matrix") => Command::Matrix {
            sims_per_cell,
            seed,
            output_path,
        },
        Some("species") => Command::Species,
        _ => usage(),
    };
    Ok(CliOptions {
        config_path,
        command,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
