// 块视图
//
// 职责：描述缓冲区中的一个窗口（偏移 + 长度），
//       提供读取，可写模式下提供原地覆盖

use std::ops::Range;
use std::str::Utf8Error;

use tracing::trace;

use crate::core::chunk::access::{Access, ReadOnly, ReadWrite};

/// 缓冲区中的一个块
///
/// 不持有数据，只记录窗口位置。窗口的移动只能由所属的
/// [`ChunkCursor`](crate::core::chunk::ChunkCursor) 完成。
///
/// 只读块没有写入方法，下面的代码无法编译：
///
/// ```compile_fail
/// use chunker::core::chunk::Chunker;
///
/// let data = *b"hello my friend!";
/// let chunker = Chunker::new(&data[..], 4).unwrap();
/// chunker.at_offset(5).chunk().copy_from(b"777");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Chunk<A: Access> {
    access: A,
    offset: usize,
    size: usize,
}

impl<A: Access> Chunk<A> {
    pub(super) fn new(access: A, offset: usize, size: usize) -> Self {
        Self {
            access,
            offset,
            size,
        }
    }

    /// 移动窗口，偏移和长度一起更新
    pub(super) fn move_chunk(&mut self, offset: usize, size: usize) {
        self.offset = offset;
        self.size = size;
    }

    pub(super) fn access(&self) -> &A {
        &self.access
    }

    /// 窗口起始偏移（字节）
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 窗口长度（字节）
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 窗口在缓冲区中的字节范围
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.size
    }

    /// 读取窗口内的全部字节
    pub fn read(&self) -> &A::Bytes {
        self.access.bytes(self.range())
    }

    /// 复制窗口内容
    pub fn to_vec(&self) -> Vec<u8> {
        self.access.to_vec(self.range())
    }

    /// 获取文本（UTF-8损失转换）
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_vec()).into_owned()
    }

    /// 窗口首字节地址，用于游标比较
    pub(super) fn data_ptr(&self) -> *const u8 {
        self.access.as_ptr().wrapping_add(self.offset)
    }
}

impl<'a> Chunk<ReadOnly<'a>> {
    /// 获取字节切片，生命周期与缓冲区一致
    pub fn as_bytes(&self) -> &'a [u8] {
        self.access.slice(self.range())
    }

    /// 尝试获取文本（UTF-8验证）
    pub fn as_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }
}

impl Chunk<ReadWrite<'_>> {
    /// 用 `value` 覆盖窗口内容
    ///
    /// 最多写入 `size` 个字节，超出部分被截断。结束块长度为0，不写入任何字节。
    pub fn copy_from(&self, value: &[u8]) -> bool {
        let cells = self.access.cells(self.range());
        let written = value.len().min(cells.len());
        for (cell, byte) in cells.iter().zip(&value[..written]) {
            cell.set(*byte);
        }

        trace!(offset = self.offset, written, truncated = value.len() > written, "覆盖块内容");
        true
    }
}
