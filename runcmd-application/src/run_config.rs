//! 单次调用配置（RunConfig）
//!
//! 每次调用新建、用完即弃，不在调用之间共享任何可变状态。
//!
//! | 选项 | 默认 | 作用 |
//! |------|------|------|
//! | `command` | 必填 | 无参异步命令 |
//! | `on_success` | 无 | 成功时以解包后的数据调用 |
//! | `on_error` | 无（回退到错误通知） | 失败时以 `CommandError` 调用，设置后不再发出默认通知 |
//! | `on_finally` | 无 | 成功/失败处理结束后恰好调用一次 |
//! | `err_msg` | `RunnerConfig::default_err_msg` | 日志与默认通知的前缀 |
//!
use crate::command::CommandOutcome;
use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use runcmd_domain::{CommandError, ResultModel};
use std::fmt;
use std::future::Future;

pub(crate) type CommandFn<T> =
    Box<dyn FnOnce() -> LocalBoxFuture<'static, ResultModel<T, CommandError>>>;
pub(crate) type SuccessFn<T> = Box<dyn FnOnce(&T) -> LocalBoxFuture<'static, ()>>;
pub(crate) type ErrorFn = Box<dyn FnOnce(CommandError) -> LocalBoxFuture<'static, ()>>;
pub(crate) type FinallyFn = Box<dyn FnOnce()>;

pub struct RunConfig<T> {
    pub(crate) command: CommandFn<T>,
    pub(crate) on_success: Option<SuccessFn<T>>,
    pub(crate) on_error: Option<ErrorFn>,
    pub(crate) on_finally: Option<FinallyFn>,
    pub(crate) err_msg: Option<String>,
}

impl<T: 'static> RunConfig<T> {
    /// 以命令构造配置
    ///
    /// 命令输出可以是 `ResultModel`，也可以是外层带传输错误的 `Result<ResultModel, E>`。
    /// 命令不接收参数，所需输入由闭包捕获。
    pub fn new<F, Fut>(command: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future + 'static,
        Fut::Output: CommandOutcome<Payload = T>,
    {
        Self {
            command: Box::new(move || {
                async move { command().await.into_result_model() }.boxed_local()
            }),
            on_success: None,
            on_error: None,
            on_finally: None,
            err_msg: None,
        }
    }

    pub fn on_success(mut self, f: impl FnOnce(&T) + 'static) -> Self {
        self.on_success = Some(Box::new(move |data: &T| {
            f(data);
            future::ready(()).boxed_local()
        }));
        self
    }

    /// 异步成功回调，收到数据的一份克隆，运行器会等待其完成
    pub fn on_success_async<F, Fut>(mut self, f: F) -> Self
    where
        T: Clone,
        F: FnOnce(T) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.on_success = Some(Box::new(move |data: &T| f(data.clone()).boxed_local()));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(CommandError) + 'static) -> Self {
        self.on_error = Some(Box::new(move |err: CommandError| {
            f(err);
            future::ready(()).boxed_local()
        }));
        self
    }

    pub fn on_error_async<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce(CommandError) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.on_error = Some(Box::new(move |err: CommandError| f(err).boxed_local()));
        self
    }

    pub fn on_finally(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_finally = Some(Box::new(f));
        self
    }

    pub fn err_msg(mut self, err_msg: impl Into<String>) -> Self {
        self.err_msg = Some(err_msg.into());
        self
    }
}

impl<T> fmt::Debug for RunConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_finally", &self.on_finally.is_some())
            .field("err_msg", &self.err_msg)
            .finish_non_exhaustive()
    }
}
