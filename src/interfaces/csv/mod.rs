pub mod number_reader;
pub mod verdict_writer;
