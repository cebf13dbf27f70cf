pub mod document_reader;
pub mod transaction_writer;
