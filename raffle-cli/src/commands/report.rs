use crate::commands::admin::authorize;
use comfy_table::{presets::UTF8_FULL, Table};
use raffle_core::{Raffle, Result};
use std::path::PathBuf;

pub fn print_remaining(raffle: &Raffle) {
    let remaining = raffle.remaining();
    if remaining.is_empty() {
        println!("No prizes imported.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Prize", "Limit", "Awarded", "Remaining"]);

    for prize in remaining {
        table.add_row(vec![
            prize.name,
            prize.limit.to_string(),
            prize.count.to_string(),
            prize.remain.to_string(),
        ]);
    }

    println!("{}", table);
}

pub async fn handle_remaining(raffle: &Raffle) -> Result<()> {
    print_remaining(raffle);
    Ok(())
}

pub async fn handle_status(raffle: &Raffle) -> Result<()> {
    let participants = raffle.participants();
    let prizes = raffle.prizes();
    let winners = raffle.winners();

    let capacity: u64 = prizes.iter().map(|p| u64::from(p.limit)).sum();
    let left: u64 = prizes.iter().map(|p| u64::from(p.remaining())).sum();

    println!("Raffle status:");
    println!("  Participants: {}", participants.len());
    println!("  Prizes: {} ({} of {} slots left)", prizes.len(), left, capacity);
    println!("  Winners: {}", winners.len());
    println!(
        "  Background: {}",
        if raffle.load_background().is_some() {
            "set"
        } else {
            "none"
        }
    );

    Ok(())
}

pub async fn handle_winners(raffle: &Raffle) -> Result<()> {
    let winners = raffle.winners();
    if winners.is_empty() {
        println!("No winners yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Name", "Award", "Time"]);

    for (idx, winner) in winners.into_iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            winner.name,
            winner.award,
            winner.time,
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub async fn handle_export(
    raffle: &Raffle,
    password: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    authorize(raffle, password)?;

    let export = raffle.export_winners()?;
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    let path = export.write_to(&dir)?;

    println!("Exported winners to {}", path.display());
    Ok(())
}
