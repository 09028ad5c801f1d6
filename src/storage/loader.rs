use crate::models::{InvalidInput, TransactionLine};
use crate::storage::errors::LoadError;
use crate::storage::{LoadReport, SalesTable};
use crate::types::TransactionId;
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

struct ReaderStats {
    columns: usize,
    malformed: usize
}

/// Loads a sales CSV into a validated `SalesTable`.
///
/// Parsing happens on a blocking task that streams rows over a bounded channel;
/// the async side validates each row and keeps the ones that pass.
pub struct SalesLoader {
    backpressure: usize
}

impl SalesLoader {
    pub fn new() -> Self {
        Self {
            backpressure: 256
        }
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads, validates and collects every row of the file at `path`.
    ///
    /// Malformed and invalid rows are logged and skipped.
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be opened, has no header row,
    /// or the reader task fails.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<SalesTable, LoadError> {
        let path = path.as_ref().to_path_buf();
        let (sender, receiver) = mpsc::channel::<TransactionLine>(self.backpressure);
        let csv_handle = spawn_csv_reader(path.clone(), sender);
        let (lines, rejected) = ingest(receiver).await;
        let stats = csv_handle.await??;

        let report = LoadReport {
            columns: stats.columns,
            accepted: lines.len(),
            rejected,
            malformed: stats.malformed
        };

        info!(
            "Loaded [{}] lines from [{}] ({} rejected, {} malformed)",
            report.accepted, path.display(), report.rejected, report.malformed
        );

        Ok(SalesTable::new(lines, report))
    }
}

impl Default for SalesLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_csv_reader(path: PathBuf, sender: mpsc::Sender<TransactionLine>) -> JoinHandle<Result<ReaderStats, LoadError>> {
    spawn_blocking(move || {
        let file = File::open(&path).map_err(|source| LoadError::Open {
            path: path.display().to_string(),
            source
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let columns = reader.headers()?.len();

        if columns == 0 {
            return Err(LoadError::MissingHeader { path: path.display().to_string() });
        }

        let mut malformed = 0;

        for result in reader.deserialize::<TransactionLine>() {
            match result {
                Ok(line) => {
                    if sender.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    malformed += 1;
                    error!("CSV deserialization error: {error}");
                }
            }
        }

        Ok(ReaderStats { columns, malformed })
    })
}

async fn ingest(mut receiver: mpsc::Receiver<TransactionLine>) -> (Vec<TransactionLine>, usize) {
    let mut lines = Vec::new();
    let mut seen = HashSet::<TransactionId>::new();
    let mut rejected = 0;

    while let Some(line) = receiver.recv().await {
        match admit(&seen, &line) {
            Ok(()) => {
                debug!("Transaction [{}] accepted", line.transaction_id);
                seen.insert(line.transaction_id.clone());
                lines.push(line);
            }
            Err(error) => {
                rejected += 1;
                warn!("{error}");
            }
        }
    }

    (lines, rejected)
}

fn admit(seen: &HashSet<TransactionId>, line: &TransactionLine) -> Result<(), InvalidInput> {
    line.validate()?;

    if seen.contains(&line.transaction_id) {
        return Err(InvalidInput::duplicate_transaction(line));
    }

    Ok(())
}
