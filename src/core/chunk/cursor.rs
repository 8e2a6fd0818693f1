// 块游标
//
// 职责：按固定步长在缓冲区上移动一个 Chunk，
//       判断当前位置是否仍在缓冲区内

use crate::core::chunk::access::Access;
use crate::core::chunk::view::Chunk;

/// 块游标
///
/// 持有一个 [`Chunk`]，每次 [`advance`](Self::advance) 把窗口向后移动一个步长。
/// 越过缓冲区末尾后偏移固定为 `data_size`、长度为0。
#[derive(Debug, Clone, Copy)]
pub struct ChunkCursor<A: Access> {
    chunk: Chunk<A>,
    data_size: usize,
    chunk_size: usize,
}

impl<A: Access> ChunkCursor<A> {
    pub(super) fn new(access: A, chunk_offset: usize, chunk_size: usize) -> Self {
        let data_size = access.len();
        let (offset, size) = window_at(chunk_offset, data_size, chunk_size);

        Self {
            chunk: Chunk::new(access, offset, size),
            data_size,
            chunk_size,
        }
    }

    /// 向后移动一个步长
    pub fn advance(&mut self) -> &mut Self {
        let new_offset = self.chunk.offset().saturating_add(self.chunk_size);
        let (offset, size) = window_at(new_offset, self.data_size, self.chunk_size);
        self.chunk.move_chunk(offset, size);
        self
    }

    /// 当前位置是否仍在缓冲区内
    pub fn is_valid(&self) -> bool {
        self.chunk.offset() < self.data_size
    }

    /// 当前块
    pub fn chunk(&self) -> &Chunk<A> {
        &self.chunk
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// 计算偏移处的窗口，越界时固定到 `(data_size, 0)`
fn window_at(offset: usize, data_size: usize, chunk_size: usize) -> (usize, usize) {
    if offset < data_size {
        (offset, (data_size - offset).min(chunk_size))
    } else {
        (data_size, 0)
    }
}

impl<A: Access> PartialEq for ChunkCursor<A> {
    fn eq(&self, other: &Self) -> bool {
        if !self.chunk.access().same_buffer(other.chunk.access())
            || self.data_size != other.data_size
        {
            return false;
        }

        // 所有越界游标都视为 end
        if !self.is_valid() && !other.is_valid() {
            return true;
        }

        std::ptr::eq(self.chunk.data_ptr(), other.chunk.data_ptr())
            && self.chunk.size() == other.chunk.size()
    }
}

impl<A: Access> Eq for ChunkCursor<A> {}
