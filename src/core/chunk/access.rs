// 缓冲区访问能力
//
// 职责：区分只读与可写两种访问方式，
//       让 Chunk / ChunkCursor / Chunker 共用同一套代码

use std::cell::Cell;
use std::ops::Range;

mod sealed {
    pub trait Sealed {}
}

/// 缓冲区访问能力（只读或可写）
///
/// 只有 [`ReadOnly`] 和 [`ReadWrite`] 两种实现，外部无法扩展。
pub trait Access: Copy + sealed::Sealed {
    /// 窗口内字节的切片类型
    type Bytes: ?Sized;

    /// 是否允许原地写入
    const WRITABLE: bool;

    /// 缓冲区总字节数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 缓冲区起始地址，仅用于身份比较
    fn as_ptr(&self) -> *const u8;

    /// 获取范围内的字节（调用方保证范围合法）
    fn bytes(&self, range: Range<usize>) -> &Self::Bytes;

    /// 复制范围内的字节
    fn to_vec(&self, range: Range<usize>) -> Vec<u8>;

    /// 是否指向同一块缓冲区
    fn same_buffer(&self, other: &Self) -> bool {
        std::ptr::eq(self.as_ptr(), other.as_ptr()) && self.len() == other.len()
    }
}

/// 只读访问：来自 `&[u8]`
#[derive(Debug, Clone, Copy)]
pub struct ReadOnly<'a>(&'a [u8]);

/// 可写访问：来自 `&mut [u8]`
///
/// 内部转换为 `&[Cell<u8>]`，多个游标可以同时持有并写入同一缓冲区，
/// 类型本身不是 `Sync`，不能跨线程共享。
#[derive(Debug, Clone, Copy)]
pub struct ReadWrite<'a>(&'a [Cell<u8>]);

impl<'a> ReadOnly<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self(data)
    }

    pub(crate) fn slice(&self, range: Range<usize>) -> &'a [u8] {
        &self.0[range]
    }
}

impl<'a> ReadWrite<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self(Cell::from_mut(data).as_slice_of_cells())
    }

    pub(crate) fn cells(&self, range: Range<usize>) -> &'a [Cell<u8>] {
        &self.0[range]
    }
}

impl sealed::Sealed for ReadOnly<'_> {}
impl sealed::Sealed for ReadWrite<'_> {}

impl Access for ReadOnly<'_> {
    type Bytes = [u8];
    const WRITABLE: bool = false;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_ptr(&self) -> *const u8 {
        self.0.as_ptr()
    }

    fn bytes(&self, range: Range<usize>) -> &[u8] {
        &self.0[range]
    }

    fn to_vec(&self, range: Range<usize>) -> Vec<u8> {
        self.0[range].to_vec()
    }
}

impl Access for ReadWrite<'_> {
    type Bytes = [Cell<u8>];
    const WRITABLE: bool = true;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_ptr(&self) -> *const u8 {
        self.0.as_ptr().cast::<u8>()
    }

    fn bytes(&self, range: Range<usize>) -> &[Cell<u8>] {
        &self.0[range]
    }

    fn to_vec(&self, range: Range<usize>) -> Vec<u8> {
        self.0[range].iter().map(Cell::get).collect()
    }
}

/// 把缓冲区引用转换为访问能力
///
/// 共享引用得到 [`ReadOnly`]，可变引用得到 [`ReadWrite`]。
pub trait IntoAccess {
    type Access: Access;

    fn into_access(self) -> Self::Access;
}

impl<'a> IntoAccess for &'a [u8] {
    type Access = ReadOnly<'a>;

    fn into_access(self) -> ReadOnly<'a> {
        ReadOnly::new(self)
    }
}

impl<'a, const N: usize> IntoAccess for &'a [u8; N] {
    type Access = ReadOnly<'a>;

    fn into_access(self) -> ReadOnly<'a> {
        ReadOnly::new(self)
    }
}

impl<'a> IntoAccess for &'a Vec<u8> {
    type Access = ReadOnly<'a>;

    fn into_access(self) -> ReadOnly<'a> {
        ReadOnly::new(self)
    }
}

impl<'a> IntoAccess for &'a str {
    type Access = ReadOnly<'a>;

    fn into_access(self) -> ReadOnly<'a> {
        ReadOnly::new(self.as_bytes())
    }
}

impl<'a> IntoAccess for &'a mut [u8] {
    type Access = ReadWrite<'a>;

    fn into_access(self) -> ReadWrite<'a> {
        ReadWrite::new(self)
    }
}

impl<'a, const N: usize> IntoAccess for &'a mut [u8; N] {
    type Access = ReadWrite<'a>;

    fn into_access(self) -> ReadWrite<'a> {
        ReadWrite::new(self)
    }
}

impl<'a> IntoAccess for &'a mut Vec<u8> {
    type Access = ReadWrite<'a>;

    fn into_access(self) -> ReadWrite<'a> {
        ReadWrite::new(self)
    }
}
