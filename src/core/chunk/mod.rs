// 零拷贝分块视图
//
// 职责：把一块连续内存按固定大小切分为块，不复制数据，
//       支持顺序遍历、按序号或偏移跳转、可写模式下原地覆盖

mod access;
mod chunk_iter;
mod chunker;
mod cursor;
mod error;
mod view;

// 重新导出
pub use self::access::{Access, IntoAccess, ReadOnly, ReadWrite};
pub use self::chunk_iter::ChunkIter;
pub use self::chunker::Chunker;
pub use self::cursor::ChunkCursor;
pub use self::error::ChunkError;
pub use self::view::Chunk;

/// 默认块大小
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64KB
