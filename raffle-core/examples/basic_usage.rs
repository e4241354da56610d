use raffle_core::{Cell, Raffle, RaffleConfig, Table};
use tempfile::tempdir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Create temp dir
    let temp_dir = tempdir()?;
    println!("Using temporary directory: {:?}", temp_dir.path());

    let raffle = Raffle::open(temp_dir.path(), RaffleConfig::default())?;

    // Tables as a spreadsheet decoder would return them, header row first
    let users: Table = vec![
        vec![Cell::from("Name")],
        vec![Cell::from("Alice")],
        vec![Cell::from(" Bob ")],
        vec![Cell::from("Carol")],
    ];
    let awards: Table = vec![
        vec![Cell::from("Prize"), Cell::from("Limit")],
        vec![Cell::from("Gold"), Cell::Number(1.0)],
        vec![Cell::from("Silver"), Cell::Number(1.0)],
    ];

    println!("Participants: {}", raffle.import_participants_table(&users)?);
    println!("Prizes: {}", raffle.import_prizes_table(&awards)?);

    for name in ["Alice", "Bob", "Carol", "Alice", "Mallory"] {
        let report = raffle.draw(name)?.report();
        println!("{:>8}: {}", name, serde_json::to_string(&report)?);
    }

    println!("\nRemaining:");
    for prize in raffle.remaining() {
        println!("  {} {}/{}", prize.name, prize.remain, prize.limit);
    }

    let export = raffle.export_winners()?;
    println!("\n{}:\n{}", export.file_name, export.contents);

    Ok(())
}
