use crate::commands::admin::authorize;
use crate::commands::report::print_remaining;
use clap::Subcommand;
use raffle_core::{Raffle, Result};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ImportCommands {
    /// Import the participant list (column A, first row is a header)
    Participants {
        /// Spreadsheet file (xlsx, xls, xlsb, ods)
        file: PathBuf,
    },
    /// Import prizes (column A name, column B capacity, first row is a header)
    Prizes {
        /// Spreadsheet file (xlsx, xls, xlsb, ods)
        file: PathBuf,
    },
}

pub async fn handle_import_command(
    cmd: ImportCommands,
    raffle: &Raffle,
    password: Option<&str>,
) -> Result<()> {
    authorize(raffle, password)?;

    match cmd {
        ImportCommands::Participants { file } => {
            println!("Importing participants from {}...", file.display());
            let count = raffle.import_participants(&file).await?;
            println!("Imported {} participants.", count);
        }

        ImportCommands::Prizes { file } => {
            println!("Importing prizes from {}...", file.display());
            let count = raffle.import_prizes(&file).await?;
            println!("Imported {} prizes.", count);
        }
    }

    println!();
    print_remaining(raffle);

    Ok(())
}
