// Chunker 单元测试

use chunker::core::chunk::{Access, ChunkError, Chunker};

fn windows<A: Access>(chunker: &Chunker<A>) -> Vec<(usize, usize)> {
    chunker.iter().map(|c| (c.offset(), c.size())).collect()
}

#[test]
fn test_partial_last_chunk() {
    let data = [7u8; 15];
    let chunker = Chunker::new(&data[..], 4).unwrap();

    assert_eq!(windows(&chunker), vec![(0, 4), (4, 4), (8, 4), (12, 3)]);
}

#[test]
fn test_no_trailing_empty_chunk() {
    let data = [7u8; 12];
    let chunker = Chunker::new(&data[..], 4).unwrap();

    assert_eq!(windows(&chunker), vec![(0, 4), (4, 4), (8, 4)]);
}

#[test]
fn test_buffer_smaller_than_chunk() {
    let chunker = Chunker::new("abc", 8).unwrap();

    let mut cursor = chunker.begin();
    assert!(cursor.is_valid());
    assert_eq!(cursor.chunk().as_bytes(), b"abc");

    cursor.advance();
    assert_eq!(cursor, chunker.end());
}

#[test]
fn test_empty_buffer() {
    let data: [u8; 0] = [];
    let chunker = Chunker::new(&data[..], 4).unwrap();

    assert!(!chunker.begin().is_valid());
    assert_eq!(chunker.begin(), chunker.end());
    assert_eq!(chunker.chunk_count(), 0);
}

#[test]
fn test_zero_chunk_size_rejected() {
    let mut data = vec![1u8, 2, 3];

    assert_eq!(Chunker::new(&data, 0).unwrap_err(), ChunkError::ZeroChunkSize);
    assert_eq!(Chunker::new(&mut data, 0).unwrap_err(), ChunkError::ZeroChunkSize);
}

#[test]
fn test_at_index_beyond_end() {
    let data = [0u8; 10];
    let chunker = Chunker::new(&data[..], 4).unwrap();

    assert_eq!(chunker.at(2).chunk().range(), 8..10);
    assert!(!chunker.at(3).is_valid());
    assert_eq!(chunker.at(3), chunker.end());
}

#[test]
fn test_at_offset_resync() {
    let data = b"hello my friend!";
    let chunker = Chunker::new(&data[..], 4).unwrap();

    let mut cursor = chunker.at_offset(5);
    assert_eq!(cursor.chunk().range(), 5..9);
    assert_eq!(cursor.chunk().as_str(), Ok(" my "));

    cursor.advance();
    assert_eq!(cursor.chunk().range(), 9..13);
    cursor.advance();
    assert_eq!(cursor.chunk().range(), 13..16);
    cursor.advance();
    assert_eq!(cursor, chunker.end());
}

#[test]
fn test_at_offset_beyond_end() {
    let data = [0u8; 4];
    let chunker = Chunker::new(&data[..], 4).unwrap();

    let cursor = chunker.at_offset(1000);
    assert_eq!(cursor.chunk().offset(), 4);
    assert_eq!(cursor.chunk().size(), 0);
    assert_eq!(cursor, chunker.end());
}

#[test]
fn test_end_stays_end() {
    let data = [0u8; 6];
    let chunker = Chunker::new(&data[..], 4).unwrap();

    let mut cursor = chunker.end();
    cursor.advance().advance();
    assert_eq!(cursor.chunk().offset(), 6);
    assert_eq!(cursor, chunker.end());
}

#[test]
fn test_cursors_from_different_buffers() {
    let left = *b"abcd";
    let right = *b"abcd";
    let a = Chunker::new(&left[..], 2).unwrap();
    let b = Chunker::new(&right[..], 2).unwrap();

    assert_ne!(a.begin(), b.begin());
    assert_ne!(a.end(), b.end());
}

#[test]
fn test_cursors_from_different_chunk_sizes() {
    let data = [0u8; 8];
    let by_two = Chunker::new(&data[..], 2).unwrap();
    let by_four = Chunker::new(&data[..], 4).unwrap();

    // 同一位置但长度不同
    assert_ne!(by_two.begin(), by_four.begin());
    assert_eq!(by_two.end(), by_four.end());
}

#[test]
fn test_copy_from_round_trip() {
    let mut data = *b"0123456789";
    {
        let chunker = Chunker::new(&mut data, 4).unwrap();
        let cursor = chunker.at(1);

        assert!(cursor.chunk().copy_from(b"abcd"));
        assert_eq!(cursor.chunk().to_vec(), b"abcd".to_vec());
    }
    assert_eq!(&data, b"0123abcd89");
}

#[test]
fn test_copy_from_truncates() {
    let mut data = *b"0123456789";
    {
        let chunker = Chunker::new(&mut data, 4).unwrap();
        assert!(chunker.at(2).chunk().copy_from(b"wxyz"));
    }
    assert_eq!(&data, b"01234567wx");
}

#[test]
fn test_copy_from_end_writes_nothing() {
    let mut data = *b"0123";
    {
        let chunker = Chunker::new(&mut data, 4).unwrap();
        assert!(chunker.end().chunk().copy_from(b"zz"));
        assert!(chunker.at(5).chunk().copy_from(b"zz"));
    }
    assert_eq!(&data, b"0123");
}

#[test]
fn test_copy_from_empty_buffer() {
    let mut data: Vec<u8> = Vec::new();
    let chunker = Chunker::new(&mut data, 4).unwrap();

    assert!(chunker.begin().chunk().copy_from(b"zz"));
    assert!(chunker.begin().chunk().to_vec().is_empty());
}

#[test]
fn test_overlapping_cursors_share_writes() {
    let mut data = *b"..........";
    let chunker = Chunker::new(&mut data, 4).unwrap();

    let first = chunker.at_offset(2);
    let second = chunker.at_offset(4);
    assert!(first.chunk().copy_from(b"AAAA"));
    assert!(second.chunk().copy_from(b"BB"));

    assert_eq!(first.chunk().to_string_lossy(), "AABB");
    assert_eq!(chunker.begin().chunk().to_string_lossy(), "..AA");
}
