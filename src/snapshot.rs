//! Current-state document: owner -> cards, rebuilt on every run.

use std::fs;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::models::CardEntry;

/// Owners in order of first appearance, each with its cards in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentState {
    owners: Vec<(String, Vec<CardEntry>)>,
}

impl CurrentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to `owner`'s list, keeping input order.
    pub fn push(&mut self, owner: &str, entry: CardEntry) {
        match self.owners.iter_mut().find(|(name, _)| name == owner) {
            Some((_, cards)) => cards.push(entry),
            None => self.owners.push((owner.to_string(), vec![entry])),
        }
    }

    pub fn cards(&self, owner: &str) -> &[CardEntry] {
        self.owners
            .iter()
            .find(|(name, _)| name == owner)
            .map(|(_, cards)| cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.owners.iter().map(|(_, cards)| cards.len()).sum()
    }

    /// Overwrite `path` with the indented JSON document.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Serialize for CurrentState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.owners.iter().map(|(name, cards)| (name, cards)))
    }
}
