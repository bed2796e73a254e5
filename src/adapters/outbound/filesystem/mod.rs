/// Filesystem adapters for file I/O operations
mod index_file_reader;
mod output_file_writer;

pub use index_file_reader::FileSystemIndexReader;
pub use output_file_writer::OutputFileWriter;
