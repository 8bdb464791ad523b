use crate::*;
use std::ffi::OsStr;
use std::process::*;

pub const DEFAULT_QSUB: &str = "qsub";

/// `<qsub> -I -l <resources>`, with the resource list kept as a single argument.
pub fn interactive_command(qsub: impl AsRef<OsStr>, resources: &ResourceRequest) -> Command {
    let mut cmd = Command::new(qsub);
    cmd.arg("-I");
    cmd.arg("-l");
    cmd.arg(resources.to_string());
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// The command line as it would be typed, for display.
pub fn command_line(cmd: &Command) -> String {
    let mut s = cmd.get_program().to_string_lossy().into_owned();
    for a in cmd.get_args() {
        s.push(' ');
        s.push_str(&a.to_string_lossy());
    }
    s
}

/// Run `cmd` in the foreground and wait for it.  A non-zero exit is an error.
pub fn run(mut cmd: Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    eprintln!("Generated: {}", command_line(&cmd));
    let status = cmd
        .status()
        .with_context(|| format!("failed to launch {}", program))?;
    if !status.success() {
        match status.code() {
            Some(code) => bail!("{} failed with exit code {}", program, code),
            None => bail!("{} was terminated by a signal ({})", program, status),
        }
    }
    Ok(())
}
