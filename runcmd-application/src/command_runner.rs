//! 命令运行器（CommandRunner）
//!
//! 一次 `run` 是三段严格有序的流水线：调用命令 → 按结果标签分发 → 收尾。
//! - 成功：调用 `on_success`，返回 `Some(data)`；
//! - 失败（`Err` 结果、外层传输错误或命令 panic）：记录错误日志，
//!   有 `on_error` 则交给它处理，否则经通知通道发出一条错误通知，返回 `None`；
//! - 收尾：`on_finally` 在任一路径上恰好执行一次，回调 panic 时同样执行。
//!
//! `on_success` 的 panic 按失败处理；`on_error` 与 `on_finally` 的 panic 只记录日志。
//! 失败不会越过 `run` 向上传播。不做重试与超时，命令永不完成时 `run` 也一直挂起，
//! 需要超时的调用方应在命令内部自行包裹。
//!
use crate::config::{ERR_MSG_SEPARATOR, RunnerConfig};
use crate::notification::{NotificationSink, NotifyOptions};
use crate::run_config::{ErrorFn, FinallyFn, RunConfig};
use bon::Builder;
use futures::FutureExt;
use runcmd_domain::{CommandError, ResultModel};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

#[derive(Builder, Clone)]
pub struct CommandRunner {
    /// 未提供 `on_error` 时的兜底通知通道
    sink: Arc<dyn NotificationSink>,
    #[builder(default)]
    config: RunnerConfig,
}

impl CommandRunner {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::builder().sink(sink).build()
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// 执行命令并分发结果；成功返回数据，失败返回 `None`
    pub async fn run<T: 'static>(&self, config: RunConfig<T>) -> Option<T> {
        let RunConfig {
            command,
            on_success,
            on_error,
            on_finally,
            err_msg,
        } = config;
        let err_msg = err_msg.unwrap_or_else(|| self.config.default_err_msg.clone());

        // 命令内部的 panic 归一为 CommandError，与声明式失败走同一路径
        let outcome = match AssertUnwindSafe(command()).catch_unwind().await {
            Ok(model) => model,
            Err(payload) => ResultModel::failure(CommandError::from_panic(payload)),
        };

        let _finally = FinallyGuard(on_finally);

        match outcome {
            ResultModel::Ok { data } => {
                // on_success 的 panic 同样视为失败：记录日志并交给 on_error 或兜底通知
                if let Some(on_success) = on_success {
                    let data_ref = &data;
                    let dispatched = AssertUnwindSafe(async move { on_success(data_ref).await })
                        .catch_unwind()
                        .await;
                    if let Err(payload) = dispatched {
                        let error = CommandError::from_panic(payload);
                        self.handle_failure(&err_msg, error, on_error).await;
                        return None;
                    }
                }
                tracing::debug!(err_msg = %err_msg, "command succeeded");
                Some(data)
            }
            ResultModel::Err { error } => {
                self.handle_failure(&err_msg, error, on_error).await;
                None
            }
        }
    }

    async fn handle_failure(&self, err_msg: &str, error: CommandError, on_error: Option<ErrorFn>) {
        let message = format!("{err_msg}{ERR_MSG_SEPARATOR}{error}");
        tracing::error!(err_msg = %err_msg, error = %error, "{message}");

        match on_error {
            Some(on_error) => {
                let handled = AssertUnwindSafe(async move { on_error(error).await })
                    .catch_unwind()
                    .await;
                if let Err(payload) = handled {
                    let err = CommandError::from_panic(payload);
                    tracing::error!(err_msg = %err_msg, error = %err, "on_error panicked");
                }
            }
            None => {
                let options = NotifyOptions::builder()
                    .content(message)
                    .duration(self.config.notify_duration())
                    .keep_alive_on_hover(self.config.keep_alive_on_hover)
                    .build();
                if let Err(err) = self.sink.error(options).await {
                    tracing::warn!(error = %err, "failed to deliver error notification");
                }
            }
        }
    }
}

/// 离开分发阶段时执行 `on_finally`，包括 `run` 在回调等待中被丢弃的情况
///
/// `on_finally` 自身的 panic 在这里吸收，`drop` 期间再次展开会直接中止进程。
struct FinallyGuard(Option<FinallyFn>);

impl Drop for FinallyGuard {
    fn drop(&mut self) {
        if let Some(on_finally) = self.0.take() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(on_finally)) {
                let err = CommandError::from_panic(payload);
                tracing::error!(error = %err, "on_finally panicked");
            }
        }
    }
}
