// chunker - 零拷贝分块视图演示
//
// Copyright (c) 2025 zedit team
//
// Licensed under MIT License

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use chunker::core::chunk::{Access, Chunk, Chunker};
use chunker::io::MmapBuffer;
use chunker::template;

const CHUNK_SIZE: usize = 4;
const FILE_CHUNK_SIZE: usize = 16;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
        )
        .init();

    info!("chunker v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    if let Some(path) = args.next() {
        let chunk_size = match args.next() {
            Some(value) => value
                .parse::<usize>()
                .with_context(|| format!("块大小无效: {}", value))?,
            None => FILE_CHUNK_SIZE,
        };
        return dump_file(PathBuf::from(path), chunk_size);
    }

    demo_integers()?;
    demo_mutable_text()?;
    demo_const_text()?;
    demo_template();

    Ok(())
}

/// 按块十六进制输出文件内容
fn dump_file(path: PathBuf, chunk_size: usize) -> anyhow::Result<()> {
    let buffer = MmapBuffer::from_file(&path)?;
    let chunker = Chunker::new(buffer.as_bytes(), chunk_size)?;

    info!(path = %path.display(), chunks = chunker.chunk_count(), "输出文件分块");
    for chunk in &chunker {
        println!("{}", hex_line(&chunk));
    }

    Ok(())
}

fn demo_integers() -> anyhow::Result<()> {
    let numbers: [i32; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 122, 42, 251 * 100];
    let bytes: Vec<u8> = numbers.iter().flat_map(|n| n.to_ne_bytes()).collect();

    println!("Integer array: {:?}", numbers);
    let chunker = Chunker::new(&bytes, CHUNK_SIZE)?;
    for chunk in &chunker {
        println!("{}", hex_line(&chunk));
    }
    println!();

    Ok(())
}

fn demo_mutable_text() -> anyhow::Result<()> {
    let mut text = *b"hello my friend!";
    println!("Non const text (write): {}", String::from_utf8_lossy(&text));

    {
        let chunker = Chunker::new(&mut text, CHUNK_SIZE)?;
        let cursor = chunker.at_offset(5);
        if cursor != chunker.end() {
            cursor.chunk().copy_from(b"777");
        }
    }
    println!("Non const new text (write): {}", String::from_utf8_lossy(&text));

    let chunker = Chunker::new(&mut text, CHUNK_SIZE)?;
    let end = chunker.end();
    let mut cursor = chunker.begin();
    while cursor != end {
        println!("{}", text_line(cursor.chunk()));
        cursor.advance();
    }
    println!();

    Ok(())
}

fn demo_const_text() -> anyhow::Result<()> {
    let text = "hello my friend!";
    let chunker = Chunker::new(text, CHUNK_SIZE)?;

    println!("Const version (read): {}", text);
    for chunk in &chunker {
        println!("{}", text_line(&chunk));
    }
    println!();

    Ok(())
}

fn demo_template() {
    let pattern = "Hello {{ name }}! I'm your friend. What do you know about {{ value }}?";
    let values = BTreeMap::from([("name", "Vasya"), ("value", "tigers")]);

    println!("Template string: {}", pattern);
    println!("Result string: {}", template::render(pattern, &values));
}

fn hex_line<A: Access>(chunk: &Chunk<A>) -> String {
    let hex: String = chunk.to_vec().iter().map(|b| format!(" {:02x}", b)).collect();
    format!("{}:{}: \"{}\"", chunk.offset(), chunk.size(), hex)
}

fn text_line<A: Access>(chunk: &Chunk<A>) -> String {
    format!("{}:{}: \"{}\"", chunk.offset(), chunk.size(), chunk.to_string_lossy())
}
