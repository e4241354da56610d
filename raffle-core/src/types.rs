use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{RaffleError, Result};

/// One prize definition with its award counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub name: String,
    pub limit: u32,
    pub count: u32,
}

impl Prize {
    pub fn new(name: impl Into<String>, limit: u32) -> Self {
        Self {
            name: name.into(),
            limit,
            count: 0,
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.count < self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub name: String,
    pub award: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeRemaining {
    pub name: String,
    pub limit: u32,
    pub count: u32,
    pub remain: u32,
}

impl From<&Prize> for PrizeRemaining {
    fn from(prize: &Prize) -> Self {
        Self {
            name: prize.name.clone(),
            limit: prize.limit,
            count: prize.count,
            remain: prize.remaining(),
        }
    }
}

/// Background image kept as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackgroundImage {
    pub data_url: String,
}

impl BackgroundImage {
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self {
            data_url: format!(
                "data:{};base64,{}",
                mime,
                general_purpose::STANDARD.encode(bytes)
            ),
        }
    }

    pub fn mime(&self) -> Option<&str> {
        self.data_url
            .strip_prefix("data:")?
            .split_once(";base64,")
            .map(|(mime, _)| mime)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        let (_, payload) = self
            .data_url
            .split_once(";base64,")
            .ok_or_else(|| RaffleError::UnsupportedImage("not a base64 data URL".to_string()))?;

        general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| RaffleError::UnsupportedImage(format!("bad base64 payload: {}", e)))
    }
}

/// A single decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Text form used for names. Whole numbers print without a fraction,
    /// at any magnitude.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            // -0.0 would otherwise print as "-0"
            Cell::Number(n) if *n == 0.0 => "0".to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    pub fn to_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Empty => Some(0.0),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Row-major table of cells, first sheet only.
pub type Table = Vec<Vec<Cell>>;
