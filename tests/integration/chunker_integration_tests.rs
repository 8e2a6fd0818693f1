// Chunker 集成测试

use std::io::Write;

use chunker::core::chunk::Chunker;
use chunker::io::{MmapBuffer, MmapBufferMut};

#[test]
fn test_patch_then_walk() {
    // 与演示程序相同的流程
    let mut text = *b"hello my friend!";
    let chunker = Chunker::new(&mut text, 4).unwrap();

    let cursor = chunker.at_offset(5);
    if cursor != chunker.end() {
        assert!(cursor.chunk().copy_from(b"777"));
    }

    let mut lines = Vec::new();
    let end = chunker.end();
    let mut it = chunker.begin();
    while it != end {
        lines.push(format!(
            "{}:{}: \"{}\"",
            it.chunk().offset(),
            it.chunk().size(),
            it.chunk().to_string_lossy()
        ));
        it.advance();
    }

    assert_eq!(
        lines,
        vec![
            "0:4: \"hell\"",
            "4:4: \"o777\"",
            "8:4: \" fri\"",
            "12:4: \"end!\"",
        ]
    );
}

#[test]
fn test_integer_array_chunks() {
    let numbers: [i32; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 122, 42, 25100];
    let bytes: Vec<u8> = numbers.iter().flat_map(|n| n.to_ne_bytes()).collect();
    let chunker = Chunker::new(&bytes, 4).unwrap();

    assert_eq!(chunker.chunk_count(), 15);
    let decoded: Vec<i32> = chunker
        .iter()
        .map(|c| i32::from_ne_bytes(c.as_bytes().try_into().unwrap()))
        .collect();
    assert_eq!(decoded, numbers);
}

#[test]
fn test_rewrite_every_chunk() {
    let mut data = vec![0u8; 10];
    {
        let chunker = Chunker::new(&mut data, 3).unwrap();
        for (i, chunk) in chunker.iter().enumerate() {
            let fill = [b'a' + i as u8; 3];
            assert!(chunk.copy_from(&fill));
        }
    }

    assert_eq!(data, b"aaabbbcccd");
}

#[test]
fn test_mmap_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"0123456789abcdef").unwrap();
    file.flush().unwrap();

    {
        let mut buffer = MmapBufferMut::from_file(file.path()).unwrap();
        let chunker = Chunker::new(buffer.as_bytes_mut(), 8).unwrap();
        assert!(chunker.at(1).chunk().copy_from(b"XXXXXXXX"));
        buffer.flush().unwrap();
    }

    let buffer = MmapBuffer::from_file(file.path()).unwrap();
    let chunker = Chunker::new(buffer.as_bytes(), 8).unwrap();
    let chunks: Vec<&str> = chunker.iter().map(|c| c.as_str().unwrap()).collect();
    assert_eq!(chunks, vec!["01234567", "XXXXXXXX"]);
}
