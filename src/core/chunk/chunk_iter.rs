// 块迭代器
//
// 职责：把 ChunkCursor 包装为标准迭代器，按顺序产出每个有效块

use std::iter::FusedIterator;

use crate::core::chunk::{access::Access, cursor::ChunkCursor, view::Chunk};

/// 从游标当前位置开始的块迭代器
#[derive(Debug, Clone)]
pub struct ChunkIter<A: Access> {
    cursor: ChunkCursor<A>,
}

impl<A: Access> ChunkIter<A> {
    pub fn new(cursor: ChunkCursor<A>) -> Self {
        Self { cursor }
    }

    /// 下一次产出前的游标位置
    pub fn cursor(&self) -> &ChunkCursor<A> {
        &self.cursor
    }
}

impl<A: Access> Iterator for ChunkIter<A> {
    type Item = Chunk<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.is_valid() {
            return None;
        }

        let chunk = *self.cursor.chunk();
        self.cursor.advance();

        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .cursor
            .data_size()
            .saturating_sub(self.cursor.chunk().offset());
        let chunks = remaining.div_ceil(self.cursor.chunk_size());
        (chunks, Some(chunks))
    }
}

impl<A: Access> ExactSizeIterator for ChunkIter<A> {}

impl<A: Access> FusedIterator for ChunkIter<A> {}

impl<A: Access> IntoIterator for ChunkCursor<A> {
    type Item = Chunk<A>;
    type IntoIter = ChunkIter<A>;

    fn into_iter(self) -> ChunkIter<A> {
        ChunkIter::new(self)
    }
}
