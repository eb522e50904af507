use anyhow::Result;
use clap::Parser;

use vrs::cli::{base_dir_or_current, orchestration, Args, Command};
use vrs::git::GitCli;
use vrs::{logging, ui};

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(args) {
        ui::display_error(&e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let git_commit = args.git_commit();
    let git_push = args.git_push();
    let base_dir = base_dir_or_current(args.dir)?;
    let git = GitCli::new(&base_dir);

    match args.command {
        Command::Init => {
            let options = orchestration::InitOptions {
                base_dir,
                git_commit,
                git_push,
            };
            orchestration::init(&options, &git)?;
            ui::display_success("Initialized vrs.yml at version 0.0.0");
        }
        Command::Bump { profiles } => {
            let options = orchestration::BumpOptions {
                base_dir,
                git_commit,
                git_push,
                active_profiles: profiles,
            };
            let outcome = orchestration::bump(&options, &git)?;
            ui::display_bump_outcome(&outcome);
        }
        Command::Current => {
            let options = orchestration::ReadCurrentOptions {
                base_dir,
                git_commit,
                git_push,
            };
            println!("{}", orchestration::read_current_version(&options)?);
        }
    }

    Ok(())
}
