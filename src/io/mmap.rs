// 内存映射缓冲区
//
// 职责：把文件映射为字节缓冲区交给 Chunker，避免一次性读入全部内容

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::{Mmap, MmapMut};
use tracing::debug;

/// 只读内存映射缓冲区
#[derive(Debug)]
pub struct MmapBuffer {
    // 空文件不做映射
    mmap: Option<Mmap>,
    length: usize,
}

impl MmapBuffer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("无法打开文件: {}", path.display()))?;

        let length = file
            .metadata()
            .with_context(|| format!("无法获取文件信息: {}", path.display()))?
            .len() as usize;

        if length == 0 {
            return Ok(Self::empty());
        }

        // 映射期间文件不应被其他进程截断
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("内存映射失败: {}", path.display()))?;

        debug!(path = %path.display(), length, "只读映射文件");

        Ok(Self {
            mmap: Some(mmap),
            length,
        })
    }

    pub fn empty() -> Self {
        Self {
            mmap: None,
            length: 0,
        }
    }

    /// 获取缓冲区长度（字节）
    pub fn len(&self) -> usize {
        self.length
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// 获取全部字节
    pub fn as_bytes(&self) -> &[u8] {
        match self.mmap {
            Some(ref mmap) => &mmap[..],
            None => &[],
        }
    }
}

/// 可写内存映射缓冲区，修改直接落到文件
#[derive(Debug)]
pub struct MmapBufferMut {
    mmap: Option<MmapMut>,
    length: usize,
}

impl MmapBufferMut {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("无法打开文件: {}", path.display()))?;

        let length = file
            .metadata()
            .with_context(|| format!("无法获取文件信息: {}", path.display()))?
            .len() as usize;

        if length == 0 {
            return Ok(Self { mmap: None, length });
        }

        let mmap = unsafe { MmapMut::map_mut(&file) }
            .with_context(|| format!("内存映射失败: {}", path.display()))?;

        debug!(path = %path.display(), length, "可写映射文件");

        Ok(Self {
            mmap: Some(mmap),
            length,
        })
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self.mmap {
            Some(ref mmap) => &mmap[..],
            None => &[],
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self.mmap {
            Some(ref mut mmap) => &mut mmap[..],
            None => &mut [],
        }
    }

    /// 把修改写回文件
    pub fn flush(&self) -> Result<()> {
        if let Some(ref mmap) = self.mmap {
            mmap.flush().context("写回映射内容失败")?;
        }
        Ok(())
    }
}
