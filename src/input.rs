//! Card list reader.
//!
//! The list is plain text, one `product_id, owner, name` record per line.
//! Only the first two commas separate fields, so card names may contain
//! commas of their own.

use std::fs;
use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::models::CardRecord;

/// Read every line of the card list, in file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Parse one card-list line.
///
/// `line_num` is only used to label the error.
pub fn parse_line(line_num: usize, line: &str) -> Result<CardRecord> {
    let malformed = || TrackerError::MalformedLine {
        line: line_num,
        content: line.trim().to_string(),
    };

    let mut fields = line.trim().splitn(3, ',').map(str::trim);
    let (Some(pid), Some(owner), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    // An empty id would request `/v2/product//pricepoints`; count it with
    // the malformed lines instead of the API failures.
    if pid.is_empty() {
        return Err(malformed());
    }

    Ok(CardRecord {
        product_id: pid.to_string(),
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
