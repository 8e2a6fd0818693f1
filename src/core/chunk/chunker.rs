// 分块器
//
// 职责：绑定缓冲区与块大小，创建各个位置的 ChunkCursor，
//       根据传入的引用类型决定块是否可写

use tracing::{debug, warn};

use crate::core::chunk::{
    access::{Access, IntoAccess},
    chunk_iter::ChunkIter,
    cursor::ChunkCursor,
    error::ChunkError,
    view::Chunk,
    DEFAULT_CHUNK_SIZE,
};

/// 分块器
///
/// 不持有也不复制缓冲区。`&[u8]` 得到只读块，`&mut [u8]` 得到可写块：
///
/// ```
/// use chunker::core::chunk::Chunker;
///
/// let mut text = *b"hello my friend!";
/// let chunker = Chunker::new(&mut text[..], 4).unwrap();
///
/// let cursor = chunker.at_offset(5);
/// if cursor != chunker.end() {
///     cursor.chunk().copy_from(b"777");
/// }
///
/// let chunks: Vec<String> = chunker.iter().map(|c| c.to_string_lossy()).collect();
/// assert_eq!(chunks, ["hell", "o777", " fri", "end!"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Chunker<A: Access> {
    access: A,
    chunk_size: usize,
}

// ========== 构造方法 ==========

impl<A: Access> Chunker<A> {
    /// 创建分块器，块大小以字节计
    pub fn new<D>(data: D, chunk_size: usize) -> Result<Self, ChunkError>
    where
        D: IntoAccess<Access = A>,
    {
        let access = data.into_access();

        if chunk_size == 0 {
            warn!(data_size = access.len(), "拒绝创建块大小为0的分块器");
            return Err(ChunkError::ZeroChunkSize);
        }

        debug!(
            data_size = access.len(),
            chunk_size,
            writable = A::WRITABLE,
            "创建分块器"
        );

        Ok(Self { access, chunk_size })
    }

    /// 使用默认块大小
    pub fn with_default_chunk_size<D>(data: D) -> Self
    where
        D: IntoAccess<Access = A>,
    {
        let access = data.into_access();
        debug!(
            data_size = access.len(),
            chunk_size = DEFAULT_CHUNK_SIZE,
            writable = A::WRITABLE,
            "创建分块器"
        );

        Self {
            access,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

// ========== 游标 ==========

impl<A: Access> Chunker<A> {
    /// 第一个块
    pub fn begin(&self) -> ChunkCursor<A> {
        ChunkCursor::new(self.access, 0, self.chunk_size)
    }

    /// 结束标记，只用于比较
    pub fn end(&self) -> ChunkCursor<A> {
        ChunkCursor::new(self.access, self.access.len(), self.chunk_size)
    }

    /// 按块序号定位，越界时得到结束游标
    pub fn at(&self, index: usize) -> ChunkCursor<A> {
        let offset = index.checked_mul(self.chunk_size).unwrap_or(usize::MAX);
        ChunkCursor::new(self.access, offset, self.chunk_size)
    }

    /// 按字节偏移定位，之后的步长从该偏移算起
    pub fn at_offset(&self, offset: usize) -> ChunkCursor<A> {
        ChunkCursor::new(self.access, offset, self.chunk_size)
    }

    /// 从头开始的块迭代器
    pub fn iter(&self) -> ChunkIter<A> {
        ChunkIter::new(self.begin())
    }
}

// ========== 基本查询 ==========

impl<A: Access> Chunker<A> {
    /// 缓冲区总字节数
    pub fn len(&self) -> usize {
        self.access.len()
    }

    pub fn is_empty(&self) -> bool {
        self.access.is_empty()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// 块数量（最后一个块可能不满）
    pub fn chunk_count(&self) -> usize {
        self.access.len().div_ceil(self.chunk_size)
    }

    /// 块是否可写
    pub fn is_writable(&self) -> bool {
        A::WRITABLE
    }
}

impl<A: Access> IntoIterator for &Chunker<A> {
    type Item = Chunk<A>;
    type IntoIter = ChunkIter<A>;

    fn into_iter(self) -> ChunkIter<A> {
        self.iter()
    }
}

// ========== 测试 ==========
