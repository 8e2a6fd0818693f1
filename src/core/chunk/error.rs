// 分块错误

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// 块大小为0时游标永远无法前进
    #[error("块大小必须大于0")]
    ZeroChunkSize,
}
