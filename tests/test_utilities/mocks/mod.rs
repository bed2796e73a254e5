/// Mock implementations for testing
mod mock_index_reader;
mod mock_progress_reporter;
mod recording_renderer;

#[allow(unused_imports)]
pub use mock_index_reader::MockIndexReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use recording_renderer::{RecordedCall, RecordingRenderer};
