//! Block table resource
//!
//! The table is a JSON document of the form
//! `{ "blocks": [ { "beginCharCode": "0000", "endCharCode": "007F", "name": "Basic Latin" } ] }`.
//! A bad record fails the whole load; no partial table is ever returned.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::block::{self, DisplayBlock, UnicodeBlock};
use crate::lookup::parse_hex;
use crate::{Result, UnicodeError};

/// Block table bundled with the binary
const BUNDLED_TABLE: &str = include_str!("../data/blocks.json");

#[derive(Deserialize)]
struct RawTable {
    blocks: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "beginCharCode")]
    begin_char_code: String,
    #[serde(rename = "endCharCode")]
    end_char_code: String,
    name: String,
}

/// Loaded Unicode block table
#[derive(Debug, Clone, Default)]
pub struct BlockTable {
    blocks: Vec<UnicodeBlock>,
}

impl BlockTable {
    /// Load the bundled table
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_TABLE)
    }

    /// Load a table from a file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a table from a reader
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_json_str(&data)
    }

    /// Parse a table from JSON text
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(data)?;
        let records = raw.blocks.ok_or(UnicodeError::MissingBlocks)?;

        let mut blocks = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match parse_record(record) {
                Ok(block) => blocks.push(block),
                Err(reason) => {
                    tracing::error!("Error in block table for block index: {}", index);
                    return Err(UnicodeError::InvalidRecord { index, reason });
                }
            }
        }

        tracing::debug!("Loaded {} Unicode blocks", blocks.len());
        Ok(Self { blocks })
    }

    /// Blocks in source order
    pub fn blocks(&self) -> &[UnicodeBlock] {
        &self.blocks
    }

    /// Flattened display chunks in source order
    pub fn display_blocks(&self) -> Vec<DisplayBlock> {
        block::expand_all(&self.blocks)
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn parse_record(record: Value) -> std::result::Result<UnicodeBlock, String> {
    let raw: RawBlock = serde_json::from_value(record).map_err(|e| e.to_string())?;

    let begin = parse_hex(&raw.begin_char_code)
        .ok_or_else(|| format!("beginCharCode {:?} is not a hex number", raw.begin_char_code))?;
    let end = parse_hex(&raw.end_char_code)
        .ok_or_else(|| format!("endCharCode {:?} is not a hex number", raw.end_char_code))?;

    UnicodeBlock::new(begin, end, raw.name)
        .ok_or_else(|| format!("endCharCode U+{:X} is before beginCharCode U+{:X}", end, begin))
}
