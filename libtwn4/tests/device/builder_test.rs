use libtwn4::device::ReaderBuilder;
use libtwn4::transport::{MockLink, PortResolver, SessionConfig};
use libtwn4::{Error, Result};

struct FailingResolver;

impl PortResolver for FailingResolver {
    fn resolve(&self) -> Result<String> {
        Err(Error::DeviceNotFound)
    }
}

#[test]
fn builder_needs_a_port() {
    let res = ReaderBuilder::new().with_link(MockLink::new()).build();
    assert!(matches!(res, Err(Error::DeviceNotFound)));
}

#[test]
fn resolver_error_propagates() {
    let res = ReaderBuilder::new()
        .resolver(FailingResolver)
        .with_link(MockLink::new())
        .build();
    assert!(matches!(res, Err(Error::DeviceNotFound)));
}

#[test]
fn built_reader_uses_given_config() {
    let mut link = MockLink::new();
    link.push_response(vec![0x00, 0x04, b'T', b'W', b'N', b'4']);
    let mut reader = ReaderBuilder::new()
        .port("/dev/ttyACM0")
        .config(SessionConfig::default().with_keep_open(true))
        .with_link(link)
        .build()
        .unwrap();
    assert_eq!(reader.version_string().unwrap(), "TWN4");
    assert!(reader.session().is_open());
    reader.close().unwrap();
    assert!(!reader.session().is_open());
}
