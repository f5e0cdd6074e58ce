use libtwn4::Error;
use libtwn4::protocol::ResponseParser;
use proptest::prelude::*;

#[test]
fn little_endian_integers() {
    let mut p = ResponseParser::new(vec![0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(p.read_u16().unwrap(), 0x1234);
    assert_eq!(p.read_u32().unwrap(), 0x1234_5678);
    assert!(p.is_exhausted());
}

#[test]
fn short_fixed_read_leaves_cursor() {
    let mut p = ResponseParser::new(vec![0x00, 0x01, 0x02]);
    p.read_u8().unwrap();
    match p.read_fixed(4) {
        Err(Error::ShortResponse { expected, actual }) => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 2);
        }
        other => panic!("expected ShortResponse, got: {:?}", other),
    }
    assert_eq!(p.position(), 1);
    assert_eq!(p.read_fixed(2).unwrap(), vec![0x01, 0x02]);
}

#[test]
fn var_bytes_is_atomic() {
    let mut p = ResponseParser::new(vec![0x05, 0xAA, 0xBB]);
    assert!(p.read_var_bytes().is_err());
    assert_eq!(p.position(), 0);
    assert_eq!(p.remaining(), 3);
}

#[test]
fn ascii_string() {
    let mut p = ResponseParser::new(vec![0x04, b'T', b'W', b'N', b'4']);
    assert_eq!(p.read_ascii().unwrap(), "TWN4");
}

#[test]
fn non_ascii_string_rejected() {
    let mut p = ResponseParser::new(vec![0x02, b'A', 0xC3]);
    assert!(matches!(p.read_ascii(), Err(Error::MalformedResponse(_))));
    assert_eq!(p.position(), 0);
}

#[test]
fn bool_is_nonzero() {
    let mut p = ResponseParser::new(vec![0x00, 0x01, 0x7F]);
    assert!(!p.read_bool().unwrap());
    assert!(p.read_bool().unwrap());
    assert!(p.read_bool().unwrap());
}

proptest! {
    // Arbitrary read sequences never panic and never move past the end.
    #[test]
    fn reads_stay_in_bounds(
        data in prop::collection::vec(any::<u8>(), 0..32),
        ops in prop::collection::vec(0u8..6, 0..16),
    ) {
        let len = data.len();
        let mut p = ResponseParser::new(data);
        for op in ops {
            let before = p.position();
            let res = match op {
                0 => p.read_u8().map(|_| ()),
                1 => p.read_u16().map(|_| ()),
                2 => p.read_u32().map(|_| ()),
                3 => p.read_var_bytes().map(|_| ()),
                4 => p.read_fixed(3).map(|_| ()),
                _ => p.read_ascii().map(|_| ()),
            };
            if res.is_err() {
                prop_assert_eq!(p.position(), before);
            }
            prop_assert!(p.position() <= len);
        }
    }
}
