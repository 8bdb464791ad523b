use clap::Parser;
use pbs_tools::catalog::{self, Presets};
use pbs_tools::terminal::TerminalPrompter;
use pbs_tools::*;

/// Interactively choose resources for a PBS job and start it with `qsub -I`
#[derive(Parser, Clone, Debug)]
struct ClArgs {
    /// Scheduler binary to invoke
    #[clap(long, default_value = qsub::DEFAULT_QSUB)]
    qsub: String,
    /// Print the generated command instead of running it
    #[clap(short = 'n', long)]
    dry_run: bool,
    /// Walltime (HH:MM:SS); skips the walltime prompt
    #[clap(short, long)]
    walltime: Option<Walltime>,
    /// Don't ask about GPUs
    #[clap(long)]
    no_gpu: bool,
}

fn main() -> Result<()> {
    let args = ClArgs::parse();
    let presets = Presets {
        walltime: args.walltime,
        no_gpu: args.no_gpu,
    };

    let request = catalog::ask(&mut TerminalPrompter::new(), presets)?;
    eprintln!("{}", request.summary());

    let cmd = qsub::interactive_command(&args.qsub, &request);
    if args.dry_run {
        println!("{}", qsub::command_line(&cmd));
        return Ok(());
    }
    qsub::run(cmd)
}
