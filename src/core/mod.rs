// Chunk Core - 分块核心
//
// 职责：在调用方持有的缓冲区上提供零拷贝的块视图、游标和分块器

pub mod chunk;

pub use chunk::{Chunk, ChunkCursor, ChunkError, Chunker, ReadOnly, ReadWrite};
