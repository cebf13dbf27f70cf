use crate::domain::transaction::Transaction;
use crate::error::Result;
use std::io::Write;

/// Writes transactions as pretty-printed JSON, one document per call.
pub struct TransactionWriter<W: Write> {
    writer: W,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, transaction)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
