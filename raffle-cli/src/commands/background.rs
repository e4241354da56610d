use crate::commands::admin::authorize;
use clap::Subcommand;
use raffle_core::{Raffle, Result};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum BackgroundCommands {
    /// Set the background image (png, jpg, gif, webp, bmp, svg)
    Set {
        /// Image file
        file: PathBuf,
    },
    /// Show the saved background
    Show,
    /// Write the saved background image to a file
    Save {
        /// Output file path
        output: PathBuf,
    },
}

pub async fn handle_background_command(
    cmd: BackgroundCommands,
    raffle: &Raffle,
    password: Option<&str>,
) -> Result<()> {
    match cmd {
        BackgroundCommands::Set { file } => {
            authorize(raffle, password)?;

            let image = raffle.set_background_file(&file).await?;
            println!(
                "Background set from {} ({})",
                file.display(),
                image.mime().unwrap_or("unknown type")
            );
        }

        BackgroundCommands::Show => match raffle.load_background() {
            Some(image) => {
                println!("Saved background:");
                println!("  Type: {}", image.mime().unwrap_or("unknown"));
                println!("  Size: {} bytes", image.decode()?.len());
            }
            None => println!("No background saved."),
        },

        BackgroundCommands::Save { output } => match raffle.load_background() {
            Some(image) => {
                tokio::fs::write(&output, image.decode()?).await?;
                println!("Background written to {}", output.display());
            }
            None => println!("No background saved."),
        },
    }

    Ok(())
}
