//! # 协作式取消令牌
//!
//! 共享布尔标志，由外部取消请求置位，由编排器和进度读取在固定
//! 检查点轮询。运行开始时复位，运行中不会复位。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 取消令牌（可廉价克隆，所有克隆共享同一标志）
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求取消
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// 是否已请求取消
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// 新一轮运行开始时复位
    pub(crate) fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let token = CancellationToken::new();
        let handle = token.clone();
        assert!(!token.is_canceled());

        handle.cancel();
        assert!(token.is_canceled());

        token.reset();
        assert!(!handle.is_canceled());
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let token = CancellationToken::new();
        let handle = token.clone();
        std::thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(token.is_canceled());
    }
}
