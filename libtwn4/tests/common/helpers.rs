// helpers.rs: reader construction shared by integration tests

use libtwn4::device::Reader;
use libtwn4::transport::MockLink;

pub use libtwn4::test_support::mock_reader;

/// Install env_logger once so `RUST_LOG=debug` shows wire traffic.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Reader seeded with `responses`, with logging enabled.
pub fn logged_reader(responses: Vec<Vec<u8>>) -> Reader<MockLink> {
    init_logging();
    mock_reader(responses)
}

/// Commands the reader sent, in order.
pub fn sent(reader: &Reader<MockLink>) -> Vec<Vec<u8>> {
    reader.link().sent()
}
