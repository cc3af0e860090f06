//! Catalog regeneration — run the external tool that rewrites the catalog.

use crate::config::RebuildCommand;
use crate::error::{CmdDocError, Result};
use std::process::Command;

/// Run the regeneration tool to completion.
///
/// Output of the tool is passed through to the caller's terminal.
pub fn regenerate(cmd: &RebuildCommand) -> Result<()> {
    let program = cmd.program.display().to_string();
    tracing::info!(program = %program, args = ?cmd.args, "regenerating catalog");

    let status = Command::new(&cmd.program)
        .args(&cmd.args)
        .status()
        .map_err(|source| CmdDocError::RebuildSpawn {
            program: program.clone(),
            source,
        })?;

    if !status.success() {
        tracing::warn!(program = %program, %status, "catalog regeneration failed");
        return Err(CmdDocError::RebuildFailed { program, status });
    }

    tracing::info!(program = %program, "catalog regenerated");
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh(script: &str) -> RebuildCommand {
        RebuildCommand {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[test]
    fn successful_tool() {
        assert!(regenerate(&sh("exit 0")).is_ok());
    }

    #[test]
    fn failing_tool_reports_status() {
        let err = regenerate(&sh("exit 3")).unwrap_err();
        assert!(matches!(err, CmdDocError::RebuildFailed { .. }));
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn missing_tool_fails_to_spawn() {
        let cmd = RebuildCommand {
            program: PathBuf::from("/nonexistent/cmddoc-rebuild-tool"),
            args: Vec::new(),
        };
        assert!(matches!(
            regenerate(&cmd).unwrap_err(),
            CmdDocError::RebuildSpawn { .. }
        ));
    }
}
