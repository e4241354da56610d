use raffle_core::{DrawOutcome, Raffle, Result};

pub async fn handle_draw(raffle: &Raffle, name: &str, json: bool) -> Result<()> {
    let outcome = raffle.draw(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report())?);
        return Ok(());
    }

    let name = name.trim();
    match &outcome {
        DrawOutcome::Won { award } => {
            println!("Congratulations {}! You won: {}", name, award);
        }
        DrawOutcome::Consolation { award } => {
            println!("{} is not on the list. Special prize: {}", name, award);
        }
        DrawOutcome::AlreadyWon { .. } | DrawOutcome::Exhausted => {
            if let Some(msg) = outcome.message() {
                println!("{}: {}", name, msg);
            }
        }
    }

    Ok(())
}
