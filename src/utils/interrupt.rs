//! # Ctrl-C 取消触发器
//!
//! 在后台线程上运行一个单线程 tokio runtime 监听 Ctrl-C：
//! - 第一次: 置位取消令牌，何时停止由编排器在检查点决定
//! - 第二次: 立即以 130 退出进程（例如阻塞在路径询问上时）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `batch/cancel.rs` 的取消令牌

use crate::batch::CancellationToken;

use std::thread;
use tracing::{debug, warn};

/// 第二次 Ctrl-C 的退出码（128 + SIGINT）
const ABORT_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalAction {
    Cancel,
    Abort,
}

/// 第 `received` 次信号的处理
fn on_signal(received: usize, token: &CancellationToken) -> SignalAction {
    if received <= 1 {
        token.cancel();
        SignalAction::Cancel
    } else {
        SignalAction::Abort
    }
}

/// 安装 Ctrl-C 处理；进程退出前线程一直存在
pub fn install(token: CancellationToken) {
    let spawned = thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    warn!(error = %e, "cannot start signal runtime, Ctrl-C cancellation disabled");
                    return;
                }
            };

            runtime.block_on(async {
                let mut received = 0;
                loop {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        warn!(error = %e, "failed to listen for Ctrl-C");
                        return;
                    }
                    received += 1;

                    match on_signal(received, &token) {
                        SignalAction::Cancel => {
                            debug!("Ctrl-C received, requesting cancellation");
                            warn!("canceling after the current step, press Ctrl-C again to abort");
                        }
                        SignalAction::Abort => {
                            warn!("second Ctrl-C, aborting");
                            std::process::exit(ABORT_EXIT_CODE);
                        }
                    }
                }
            });
        });

    if let Err(e) = spawned {
        warn!(error = %e, "cannot spawn Ctrl-C thread");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_signal_cancels_second_aborts() {
        let token = CancellationToken::new();

        assert_eq!(on_signal(1, &token), SignalAction::Cancel);
        assert!(token.is_canceled());

        assert_eq!(on_signal(2, &token), SignalAction::Abort);
        assert_eq!(on_signal(5, &token), SignalAction::Abort);
    }
}
