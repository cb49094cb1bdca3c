// libslix-rs/libslix/src/store/memory.rs

//! In-memory [`KeyValueStore`] with a `Key: value` text form.

use crate::store::batch::WriteBatch;
use crate::store::traits::KeyValueStore;
use crate::utils::{bytes_to_hex_spaced, parse_hex};
use crate::{BatchError, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Comment(String),
    Value { key: String, value: String },
}

/// Ordered in-memory store. Values are kept in their text form so the store
/// can be rendered to and parsed from a `Key: value` document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Vec<Line>,
    read_only: bool,
    /// Testing hook: number of writes accepted before writes start failing
    pub write_budget: Option<usize>,
}

impl MemoryStore {
    /// Empty writable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Allow `n` more writes (comments included), then fail with `ReadOnly`.
    pub fn set_write_budget(&mut self, n: usize) {
        self.write_budget = Some(n);
    }

    /// Parse a `Key: value` document. Lines starting with `#` are comments,
    /// blank lines are skipped.
    pub fn from_text(text: &str) -> Result<Self, StoreError> {
        let mut lines = Vec::new();
        for (no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                lines.push(Line::Comment(comment.trim_start().to_string()));
                continue;
            }
            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| StoreError::Parse(format!("line {}: missing ':'", no + 1)))?;
            lines.push(Line::Value {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            });
        }
        Ok(Self {
            lines,
            ..Self::default()
        })
    }

    /// Render the store as a `Key: value` document.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Comment(c) => {
                    out.push_str("# ");
                    out.push_str(c);
                }
                Line::Value { key, value } => {
                    out.push_str(key);
                    out.push_str(": ");
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }

    /// Keys in write order.
    pub fn keys(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Value { key, .. } => Some(key.as_str()),
                Line::Comment(_) => None,
            })
            .collect()
    }

    /// Comment lines in write order.
    pub fn comments(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Comment(c) => Some(c.as_str()),
                Line::Value { .. } => None,
            })
            .collect()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// True when no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn raw(&self, key: &str) -> Result<&str, StoreError> {
        self.lines
            .iter()
            .find_map(|l| match l {
                Line::Value { key: k, value } if k == key => Some(value.as_str()),
                _ => None,
            })
            .ok_or_else(|| StoreError::MissingKey(key.to_string()))
    }

    fn charge_write(&mut self) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        if let Some(budget) = self.write_budget.as_mut() {
            if *budget == 0 {
                return Err(StoreError::ReadOnly);
            }
            *budget -= 1;
        }
        Ok(())
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.charge_write()?;
        let existing = self.lines.iter_mut().find_map(|l| match l {
            Line::Value { key: k, value } if k == key => Some(value),
            _ => None,
        });
        match existing {
            Some(slot) => *slot = value,
            None => self.lines.push(Line::Value {
                key: key.to_string(),
                value,
            }),
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn key_exists(&self, key: &str) -> bool {
        self.raw(key).is_ok()
    }

    fn read_hex(&self, key: &str, out: &mut [u8]) -> Result<(), StoreError> {
        let bytes = parse_hex(self.raw(key)?)?;
        if bytes.len() != out.len() {
            return Err(StoreError::Length {
                expected: out.len(),
                actual: bytes.len(),
            });
        }
        out.copy_from_slice(&bytes);
        Ok(())
    }

    fn write_hex(&mut self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        self.put(key, bytes_to_hex_spaced(data))
    }

    fn read_bool(&self, key: &str) -> Result<bool, StoreError> {
        match self.raw(key)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(StoreError::Parse(format!("not a bool: '{}'", other))),
        }
    }

    fn write_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.put(key, value.to_string())
    }

    fn read_u32(&self, key: &str) -> Result<u32, StoreError> {
        let raw = self.raw(key)?;
        raw.parse::<u32>()
            .map_err(|e| StoreError::Parse(format!("not a u32: '{}': {}", raw, e)))
    }

    fn write_u32(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.put(key, value.to_string())
    }

    fn write_comment(&mut self, text: &str) -> Result<(), StoreError> {
        self.charge_write()?;
        self.lines.push(Line::Comment(text.to_string()));
        Ok(())
    }

    fn commit(&mut self, batch: &WriteBatch) -> Result<(), BatchError> {
        let mut staged = self.clone();
        for (index, write) in batch.writes().iter().enumerate() {
            write
                .apply(&mut staged)
                .map_err(|source| BatchError { index, source })?;
        }
        *self = staged;
        Ok(())
    }
}
