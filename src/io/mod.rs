// IO System - IO系统
//
// 职责：为分块器提供来自文件的缓冲区（内存映射）

pub mod mmap;

pub use mmap::{MmapBuffer, MmapBufferMut};
