//! Resolves one name to a draw outcome.
//!
//! Checks run in a fixed order: already won, not registered (consolation),
//! no capacity left, then a uniform pick among prizes that still have room.
//! Only the last branch writes to storage.

use crate::error::{RaffleError, Result};
use crate::raffle::Raffle;
use crate::types::WinnerRecord;
use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    AlreadyWon { award: String },
    Consolation { award: String },
    Exhausted,
    Won { award: String },
}

impl DrawOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, DrawOutcome::Consolation { .. } | DrawOutcome::Won { .. })
    }

    pub fn is_special(&self) -> bool {
        matches!(self, DrawOutcome::Consolation { .. })
    }

    /// Award handed out by this draw, if any.
    pub fn award(&self) -> Option<&str> {
        match self {
            DrawOutcome::Consolation { award } | DrawOutcome::Won { award } => Some(award),
            DrawOutcome::AlreadyWon { .. } | DrawOutcome::Exhausted => None,
        }
    }

    /// Rejection message for outcomes that are not ok.
    pub fn message(&self) -> Option<String> {
        match self {
            DrawOutcome::AlreadyWon { award } => Some(format!("already won: {}", award)),
            DrawOutcome::Exhausted => Some("no prizes remaining".to_string()),
            DrawOutcome::Consolation { .. } | DrawOutcome::Won { .. } => None,
        }
    }

    pub fn report(&self) -> DrawReport {
        DrawReport {
            ok: self.is_ok(),
            award: self.award().map(str::to_string),
            is_special: self.is_ok().then(|| self.is_special()),
            msg: self.message(),
        }
    }
}

/// Flat `{ok, award, isSpecial, msg}` shape for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_special: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Raffle {
    pub fn draw(&self, name: &str) -> Result<DrawOutcome> {
        self.draw_with_rng(name, &mut rand::thread_rng())
    }

    pub fn draw_with_rng<R: Rng>(&self, name: &str, rng: &mut R) -> Result<DrawOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RaffleError::InvalidName);
        }

        let state = self.state();
        let participants = state.participants();
        let mut prizes = state.prizes();
        let mut winners = state.winners();

        if let Some(previous) = winners.iter().find(|w| w.name == name) {
            tracing::warn!("'{}' already won {}", name, previous.award);
            return Ok(DrawOutcome::AlreadyWon {
                award: previous.award.clone(),
            });
        }

        if !participants.iter().any(|p| p == name) {
            // not recorded, so the same name can land here again
            tracing::info!("'{}' is not registered, consolation prize", name);
            return Ok(DrawOutcome::Consolation {
                award: self.config().consolation_award.clone(),
            });
        }

        let eligible: Vec<usize> = prizes
            .iter()
            .enumerate()
            .filter(|(_, prize)| prize.has_capacity())
            .map(|(idx, _)| idx)
            .collect();

        if eligible.is_empty() {
            tracing::warn!("No prizes remaining for '{}'", name);
            return Ok(DrawOutcome::Exhausted);
        }

        let picked = eligible[rng.gen_range(0..eligible.len())];
        let prize = &mut prizes[picked];
        prize.count += 1;
        let award = prize.name.clone();

        winners.push(WinnerRecord {
            name: name.to_string(),
            award: award.clone(),
            time: Local::now().format(&self.config().time_format).to_string(),
        });

        state.record_win(&prizes, &winners)?;

        tracing::info!("'{}' won {}", name, award);
        Ok(DrawOutcome::Won { award })
    }
}
