pub mod sheet;

use crate::error::{RaffleError, Result};
use crate::raffle::Raffle;
use crate::types::{Cell, Prize, Table};
use std::collections::HashSet;
use std::path::Path;

/// Read a spreadsheet file fully into memory and decode its first sheet.
pub async fn read_table(path: &Path) -> Result<Table> {
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(RaffleError::missing_input(format!(
            "No spreadsheet at '{}'",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    sheet::decode_first_sheet(bytes)
}

/// Participant names from the first column, header row skipped. Names are
/// trimmed, blanks dropped and repeats collapsed to their first occurrence.
pub fn parse_participants(table: &Table) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut participants = Vec::new();
    let mut duplicates = 0usize;

    for row in table.iter().skip(1) {
        let name = first_column_text(row);
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            participants.push(name);
        } else {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        tracing::warn!("Dropped {} duplicate participant names", duplicates);
    }

    participants
}

/// Prize rows (name, limit) with the header row skipped. Rows with a blank
/// name or a limit that is not a positive whole number are dropped.
pub fn parse_prizes(table: &Table) -> Result<Vec<Prize>> {
    let mut seen = HashSet::new();
    let mut prizes = Vec::new();

    for (idx, row) in table.iter().enumerate().skip(1) {
        let row_number = idx + 1;
        let name = first_column_text(row);
        if name.is_empty() {
            tracing::debug!("Row {}: skipped, empty prize name", row_number);
            continue;
        }

        let Some(limit) = row.get(1).and_then(parse_limit) else {
            tracing::debug!("Row {}: skipped '{}', unusable limit", row_number, name);
            continue;
        };

        if !seen.insert(name.clone()) {
            return Err(RaffleError::DuplicatePrize {
                name,
                row: row_number,
            });
        }

        prizes.push(Prize::new(name, limit));
    }

    Ok(prizes)
}

fn first_column_text(row: &[Cell]) -> String {
    row.first()
        .map(|cell| cell.to_text().trim().to_string())
        .unwrap_or_default()
}

fn parse_limit(cell: &Cell) -> Option<u32> {
    let value = cell.to_number()?;
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

impl Raffle {
    pub async fn import_participants(&self, path: &Path) -> Result<usize> {
        let table = read_table(path).await?;
        let count = self.import_participants_table(&table)?;
        tracing::info!("Imported {} participants from {}", count, path.display());
        Ok(count)
    }

    pub fn import_participants_table(&self, table: &Table) -> Result<usize> {
        let participants = parse_participants(table);
        self.state().set_participants(&participants)?;
        Ok(participants.len())
    }

    pub async fn import_prizes(&self, path: &Path) -> Result<usize> {
        let table = read_table(path).await?;
        let count = self.import_prizes_table(&table)?;
        tracing::info!("Imported {} prizes from {}", count, path.display());
        Ok(count)
    }

    pub fn import_prizes_table(&self, table: &Table) -> Result<usize> {
        let prizes = parse_prizes(table)?;
        self.state().set_prizes(&prizes)?;
        Ok(prizes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RaffleConfig;
    use crate::import::sheet::tests::xlsx_bytes;

    fn table(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|row| row.iter().map(|cell| Cell::from(*cell)).collect())
            .collect()
    }

    #[test]
    fn test_participants_trimmed_and_blanks_dropped() {
        let rows = table(&[&["Header"], &["Alice"], &[""], &[" Bob "]]);
        assert_eq!(parse_participants(&rows), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_participants_duplicates_collapsed() {
        let rows = table(&[&["Name"], &["Alice"], &["Bob"], &["Alice "]]);
        assert_eq!(parse_participants(&rows), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_participants_numeric_and_short_rows() {
        let rows: Table = vec![
            vec![Cell::from("Name")],
            vec![],
            vec![Cell::Number(1001.0)],
        ];
        assert_eq!(parse_participants(&rows), vec!["1001"]);
    }

    #[test]
    fn test_prizes_bad_limits_excluded() {
        let rows = table(&[&["Header"], &["Gold", "2"], &["Bad", "0"], &["Silver", "x"]]);
        assert_eq!(parse_prizes(&rows).unwrap(), vec![Prize::new("Gold", 2)]);
    }

    #[test]
    fn test_prizes_numeric_cells_and_edge_values() {
        let rows: Table = vec![
            vec![Cell::from("Prize"), Cell::from("Limit")],
            vec![Cell::from(" Gold "), Cell::Number(3.0)],
            vec![Cell::from("Half"), Cell::Number(1.5)],
            vec![Cell::from("Negative"), Cell::Number(-1.0)],
            vec![Cell::from("NoLimit")],
            vec![Cell::Empty, Cell::Number(5.0)],
        ];
        assert_eq!(parse_prizes(&rows).unwrap(), vec![Prize::new("Gold", 3)]);
    }

    #[test]
    fn test_duplicate_prize_rejected() {
        let rows = table(&[&["Header"], &["Gold", "1"], &["Gold", "2"]]);
        match parse_prizes(&rows) {
            Err(RaffleError::DuplicatePrize { name, row }) => {
                assert_eq!(name, "Gold");
                assert_eq!(row, 3);
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_import_tables_persist() {
        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();

        let users = table(&[&["Name"], &["Alice"], &["Bob"]]);
        assert_eq!(raffle.import_participants_table(&users).unwrap(), 2);
        assert_eq!(raffle.participants(), vec!["Alice", "Bob"]);

        let awards = table(&[&["Prize", "Limit"], &["Gold", "1"]]);
        assert_eq!(raffle.import_prizes_table(&awards).unwrap(), 1);
        assert_eq!(raffle.prizes(), vec![Prize::new("Gold", 1)]);
    }

    #[test]
    fn test_failed_prize_import_keeps_previous_list() {
        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        let awards = table(&[&["Prize", "Limit"], &["Gold", "1"]]);
        raffle.import_prizes_table(&awards).unwrap();

        let bad = table(&[&["Prize", "Limit"], &["Tea", "1"], &["Tea", "1"]]);
        assert!(raffle.import_prizes_table(&bad).is_err());
        assert_eq!(raffle.prizes(), vec![Prize::new("Gold", 1)]);
    }

    #[tokio::test]
    async fn test_missing_file_is_missing_input() {
        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        let result = raffle
            .import_participants(Path::new("/nonexistent/people.xlsx"))
            .await;
        assert!(matches!(result, Err(RaffleError::MissingInput(_))));

        let result = raffle.import_prizes(Path::new("")).await;
        assert!(matches!(result, Err(RaffleError::MissingInput(_))));
        assert!(raffle.prizes().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_file_is_spreadsheet_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("people.xlsx");
        std::fs::write(&path, "name\nAlice\n").unwrap();

        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        let result = raffle.import_participants(&path).await;
        assert!(matches!(result, Err(RaffleError::Spreadsheet(_))));
        assert!(raffle.participants().is_empty());
    }

    #[tokio::test]
    async fn test_import_workbooks_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let users = temp_dir.path().join("users.xlsx");
        let awards = temp_dir.path().join("awards.xlsx");

        std::fs::write(
            &users,
            xlsx_bytes(|sheet| {
                sheet.write_string(0, 0, "Name")?;
                sheet.write_string(1, 0, " Alice ")?;
                sheet.write_string(2, 0, "Bob")?;
                sheet.write_string(3, 0, "Alice")?;
                Ok(())
            }),
        )
        .unwrap();
        std::fs::write(
            &awards,
            xlsx_bytes(|sheet| {
                sheet.write_string(0, 0, "Prize")?;
                sheet.write_string(0, 1, "Limit")?;
                sheet.write_string(1, 0, "Gold")?;
                sheet.write_number(1, 1, 1)?;
                sheet.write_string(2, 0, "Mug")?;
                sheet.write_number(2, 1, 2.5)?;
                Ok(())
            }),
        )
        .unwrap();

        let raffle = Raffle::in_memory(RaffleConfig::default()).unwrap();
        assert_eq!(raffle.import_participants(&users).await.unwrap(), 2);
        assert_eq!(raffle.participants(), vec!["Alice", "Bob"]);

        assert_eq!(raffle.import_prizes(&awards).await.unwrap(), 1);
        assert_eq!(raffle.prizes(), vec![Prize::new("Gold", 1)]);
    }

    #[test]
    fn test_boolean_limit_counts_as_one() {
        let rows: Table = vec![
            vec![Cell::from("Prize"), Cell::from("Limit")],
            vec![Cell::from("Pen"), Cell::Bool(true)],
            vec![Cell::from("Cap"), Cell::Bool(false)],
        ];
        assert_eq!(parse_prizes(&rows).unwrap(), vec![Prize::new("Pen", 1)]);
    }
}
