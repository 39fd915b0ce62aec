use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::engine::errors::IngestError;
use crate::models::Transaction;

/// Reads transactions from CSV, stopping at the first row that is malformed or inconsistent.
///
/// Rows are numbered from 1, not counting the header.
pub fn read_transactions<R: Read>(input: R) -> Result<Vec<Transaction>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(input);

    let mut transactions = Vec::new();

    for (index, result) in reader.deserialize::<Transaction>().enumerate() {
        let transaction = result?;

        transaction.validate()
            .map_err(|source| IngestError::InvalidRecord { row: index + 1, source })?;

        transactions.push(transaction);
    }

    Ok(transactions)
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, IngestError> {
    let file = File::open(path)?;
    let transactions = read_transactions(BufReader::new(file))?;

    debug!("Loaded [{}] transactions from [{}]", transactions.len(), path.display());

    Ok(transactions)
}

/// Loads a CSV file on the blocking pool so callers on the runtime are not stalled by file I/O.
pub async fn load_transactions_async(path: PathBuf) -> Result<Vec<Transaction>, IngestError> {
    spawn_blocking(move || load_transactions(&path)).await?
}

pub fn write_transactions<W: Write>(output: W, transactions: &[Transaction]) -> Result<(), IngestError> {
    let mut writer = WriterBuilder::new().from_writer(output);

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}
