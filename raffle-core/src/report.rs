use crate::error::{RaffleError, Result};
use crate::raffle::Raffle;
use crate::types::{PrizeRemaining, WinnerRecord};
use chrono::Local;
use std::path::{Path, PathBuf};

pub const WINNERS_HEADER: &str = "name,award,time";

/// Winners log rendered as comma-separated text. Fields are written as-is.
pub fn render_winners_csv(winners: &[WinnerRecord]) -> String {
    let rows = winners
        .iter()
        .map(|w| format!("{},{},{}", w.name, w.award, w.time))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", WINNERS_HEADER, rows)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnersExport {
    pub file_name: String,
    pub contents: String,
}

impl WinnersExport {
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        tracing::info!("Wrote winners export to {}", path.display());
        Ok(path)
    }
}

impl Raffle {
    pub fn remaining(&self) -> Vec<PrizeRemaining> {
        self.prizes().iter().map(PrizeRemaining::from).collect()
    }

    pub fn export_winners(&self) -> Result<WinnersExport> {
        let winners = self.winners();
        if winners.is_empty() {
            return Err(RaffleError::NoWinners);
        }

        let file_name = format!(
            "{}_{}.csv",
            self.config().export_prefix,
            Local::now().format("%Y-%m-%d")
        );

        Ok(WinnersExport {
            file_name,
            contents: render_winners_csv(&winners),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RaffleConfig;
    use crate::types::Prize;
    use tempfile::tempdir;

    fn record(name: &str, award: &str, time: &str) -> WinnerRecord {
        WinnerRecord {
            name: name.to_string(),
            award: award.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn test_single_winner_csv() {
        let csv = render_winners_csv(&[record("Alice", "Gold", "T")]);
        assert_eq!(csv, "name,award,time\nAlice,Gold,T");
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_commas_written_verbatim() {
        let csv = render_winners_csv(&[record("Doe, Jane", "Gold", "T")]);
        assert_eq!(csv, "name,award,time\nDoe, Jane,Gold,T");
    }

    #[test]
    fn test_export_empty_log_fails() {
        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        assert!(matches!(raffle.export_winners(), Err(RaffleError::NoWinners)));
    }

    #[test]
    fn test_export_writes_dated_file() {
        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        raffle
            .state()
            .set_winners(&[record("Alice", "Gold", "T")])
            .unwrap();

        let export = raffle.export_winners().unwrap();
        assert!(export.file_name.starts_with("winners_"));
        assert!(export.file_name.ends_with(".csv"));
        assert_eq!(export.contents, "name,award,time\nAlice,Gold,T");

        let temp_dir = tempdir().unwrap();
        let path = export.write_to(temp_dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), export.contents);
    }

    #[test]
    fn test_remaining_projection() {
        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        let mut gold = Prize::new("Gold", 3);
        gold.count = 1;
        raffle
            .state()
            .set_prizes(&[gold, Prize::new("Silver", 2)])
            .unwrap();

        let remaining = raffle.remaining();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].remain, 2);
        assert_eq!(remaining[0].count, 1);
        assert_eq!(remaining[1].remain, 2);

        // read-only
        assert_eq!(raffle.prizes()[0].count, 1);
    }
}
