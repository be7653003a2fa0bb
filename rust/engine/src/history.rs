use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandCategory;
use crate::seat::Action;
use crate::table::Phase;

/// One player action as it happened, for hand-history replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat_id: usize,
    /// The betting phase when this action occurred
    pub phase: Phase,
    pub action: Action,
    /// Raise size, when the action carried one
    #[serde(default)]
    pub amount: Option<u32>,
}

/// Complete record of one hand, serialized to JSONL.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Sequence number of the hand within the session
    pub hand_no: u64,
    /// RNG seed of the table, when known (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Board cards at the end of the hand
    pub board: Vec<Card>,
    pub pot: u32,
    /// Seat ids of the winners
    pub winners: Vec<usize>,
    #[serde(default)]
    pub winning_rank: Option<HandCategory>,
    /// RFC3339 timestamp, injected on write when missing
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends hand records to a JSONL file, one line per hand.
pub struct HandLogger {
    writer: BufWriter<File>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
