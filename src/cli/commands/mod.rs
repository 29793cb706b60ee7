//! Command execution coordinating the release pipeline.
//!
//! Dispatches parsed arguments to the command implementations and turns
//! their outcome into an exit code with user feedback.

mod check;
mod clean;
mod publish;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;

use check::execute_check;
use clean::execute_clean;
use publish::execute_publish;

/// Execute the main command based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = super::OutputManager::new(false, false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);

    let result = match &args.command {
        Command::Publish { .. } => execute_publish(&args, &config).await,
        Command::Clean => execute_clean(&args, &config).await,
        Command::Check => execute_check(&args, &config).await,
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&format!(
                "Command '{}' failed: {}",
                args.command.name(),
                e
            ));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    config.indent(&suggestion);
                }
            }

            Ok(1)
        }
    }
}
