use clap::Subcommand;
use dialoguer::{Confirm, Password};
use raffle_core::{Raffle, Result};

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Verify the admin password
    Check,
    /// Set the first admin password when none is configured
    Init,
    /// Change the admin password
    SetPassword,
}

/// Gate an administrative action behind the admin password. Prompts when no
/// password was passed on the command line.
pub fn authorize(raffle: &Raffle, password: Option<&str>) -> Result<()> {
    let candidate = match password {
        Some(password) => password.to_string(),
        None => Password::new()
            .with_prompt("Admin password")
            .interact()?,
    };

    raffle.require_admin(&candidate)
}

pub async fn handle_admin_command(
    cmd: AdminCommands,
    raffle: &Raffle,
    password: Option<&str>,
) -> Result<()> {
    match cmd {
        AdminCommands::Check => {
            authorize(raffle, password)?;
            println!("Admin password accepted.");
        }

        AdminCommands::Init => {
            let new_password = Password::new()
                .with_prompt("New admin password")
                .with_confirmation("Confirm admin password", "Passwords don't match")
                .interact()?;

            raffle.initialize_admin_password(&new_password)?;
            println!("Admin password set.");
        }

        AdminCommands::SetPassword => {
            let current = match password {
                Some(password) => password.to_string(),
                None => Password::new()
                    .with_prompt("Current admin password")
                    .interact()?,
            };

            let new_password = Password::new()
                .with_prompt("New admin password")
                .with_confirmation("Confirm admin password", "Passwords don't match")
                .interact()?;

            raffle.set_admin_password(&current, &new_password)?;
            println!("Admin password updated.");
            println!("A reset brings back the configured password.");
        }
    }

    Ok(())
}

pub async fn handle_reset(raffle: &Raffle, password: Option<&str>, yes: bool) -> Result<()> {
    authorize(raffle, password)?;

    if !yes {
        let confirm = Confirm::new()
            .with_prompt("Clear all participants, prizes, winners and the background?")
            .default(false)
            .interact()?;

        if !confirm {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    let removed = raffle.reset_all()?;
    println!("Cleared {} stored entries.", removed);

    Ok(())
}
