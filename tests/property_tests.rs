mod common;

use argos_probe::{decode, DecodeError};
use common::{make_bmp, make_gif, make_png};
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #[test]
    fn gif_dimensions_and_size(width: u16, height: u16, body in 0usize..2048) {
        let data = make_gif(width, height, body);
        let len = data.len() as u64;
        let metadata = decode(&mut Cursor::new(data)).unwrap();
        prop_assert_eq!(metadata.width, i32::from(width));
        prop_assert_eq!(metadata.height, i32::from(height));
        prop_assert_eq!(metadata.size, len);
    }

    #[test]
    fn png_big_endian_dimensions(width: i32, height: i32, idat in 0usize..2048) {
        let data = make_png(width, height, idat);
        let len = data.len() as u64;
        let metadata = decode(&mut Cursor::new(data)).unwrap();
        prop_assert_eq!((metadata.width, metadata.height), (width, height));
        prop_assert_eq!(metadata.size, len);
    }

    #[test]
    fn bmp_little_endian_dimensions(
        header_size in prop::sample::select(vec![40i32, 108, 124]),
        width: i32,
        height: i32,
    ) {
        let data = make_bmp(*b"BM", header_size, width, height, 8);
        let metadata = decode(&mut Cursor::new(data)).unwrap();
        prop_assert_eq!((metadata.width, metadata.height), (width, height));
    }

    #[test]
    fn unknown_magic_never_decodes(probe in any::<[u8; 4]>(), tail in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(!probe.starts_with(b"GIF"));
        prop_assume!(!probe.starts_with(b"BM") && !probe.starts_with(b"MB"));
        prop_assume!(probe != [0x89, 0x50, 0x4E, 0x47]);

        let mut data = probe.to_vec();
        data.extend_from_slice(&tail);
        let is_unsupported = matches!(
            decode(&mut Cursor::new(data)),
            Err(DecodeError::UnsupportedFormat { .. })
        );
        prop_assert!(is_unsupported);
    }
}
