//! raffle-core - Spreadsheet-driven prize draws
//!
//! Imports participants and prizes from spreadsheets, draws winners by name,
//! tracks remaining prize capacity and exports the winners log. All state
//! lives in a local key-value store.

pub mod admin;
pub mod config;
pub mod draw;
pub mod error;
pub mod import;
pub mod raffle;
pub mod report;
pub mod session;
pub mod storage;
pub mod types;

pub use admin::AdminSecret;
pub use config::{RaffleConfig, StorageKeys};
pub use draw::{DrawOutcome, DrawReport};
pub use error::{RaffleError, Result};
pub use raffle::Raffle;
pub use report::WinnersExport;
pub use types::{BackgroundImage, Cell, Prize, PrizeRemaining, Table, WinnerRecord};
