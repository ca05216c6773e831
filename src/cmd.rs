use std::process::{Command, Stdio};

pub type CmdResult<T> = Result<T, CmdError>;

#[derive(Debug, thiserror::Error)]
pub enum CmdError {
    #[error("command failed: {command}: {detail}")]
    Failed { command: String, detail: String },

    #[error("command not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Run a command that pipes its stdin from a byte slice and
/// capture its output. Fails if the command returns a non-zero
/// exit code; stderr is carried inside the error so callers can
/// surface it.
///
/// Arguments passed here end up in the process list, so secrets
/// belong in `stdin_data`, not in `args`.
pub fn run_with_stdin(program: &str, args: &[&str], stdin_data: &[u8]) -> CmdResult<String> {
    use std::io::Write;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CmdError::NotFound(program.to_string())
            } else {
                CmdError::Io(e)
            }
        })?;

    if let Some(stdin) = &mut child.stdin {
        stdin.write_all(stdin_data)?;
    }
    drop(child.stdin.take());

    let output = child.wait_with_output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr
        };
        Err(CmdError::Failed {
            command: format_command(program, args),
            detail,
        })
    }
}

fn format_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| (*a).to_string()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_feeds_stdin() {
        let out = run_with_stdin("cat", &[], b"over stdin").unwrap();
        assert_eq!(out, "over stdin");
    }

    #[test]
    fn nonzero_exit_reports_the_command() {
        let err = run_with_stdin("false", &[], b"").unwrap_err();
        assert!(matches!(err, CmdError::Failed { .. }));
        assert!(err.to_string().contains("command failed: false"));
    }

    #[test]
    fn missing_program_maps_to_not_found() {
        let err = run_with_stdin("definitely-not-a-real-program", &[], b"").unwrap_err();
        assert!(matches!(err, CmdError::NotFound(_)));
    }
}
