use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;
use log::info;

use loxide::lox::Lox;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Script to evaluate; omit it for an interactive prompt
    script: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Cli = Cli::parse();

    let mut stdout = io::stdout();
    let mut lox = Lox::new(&mut stdout);

    match args.script.as_slice() {
        [] => {
            info!("No script given, starting prompt");
            lox.run_prompt()?;
        }

        [path] => {
            let source: String = match fs::read_to_string(path) {
                Ok(source) => source,

                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    eprintln!("{}: {}", path.display(), e);
                    process::exit(127);
                }

                Err(e) => return Err(e.into()),
            };

            lox.run(&source);

            if lox.had_error() {
                process::exit(65);
            }

            if lox.had_runtime_error() {
                process::exit(70);
            }
        }

        _ => {
            println!("Usage: loxide [script]");
            process::exit(64);
        }
    }

    Ok(())
}
