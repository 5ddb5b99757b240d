//! 通知通道（NotificationSink）协议
//!
//! 由 UI 层实现并在构造 `CommandRunner` 时注入，负责把通知展示给用户。
//! 运行器只依赖 `error` 一种能力，其余级别供应用其他部分复用同一通道。
//!
use crate::error::NotifyError;
use async_trait::async_trait;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 通知默认展示时长（毫秒）
pub const DEFAULT_NOTIFY_DURATION_MS: u64 = 2000;

/// 通知级别，序列化为小写字符串，与前端通知组件的 `type` 取值一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// 通知参数
///
/// 未显式设置时：展示 2 秒，鼠标悬停时保持不消失。
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    /// 正文
    #[builder(into)]
    pub content: String,
    /// 标题（可选）
    #[builder(into)]
    pub title: Option<String>,
    /// 自动关闭前的展示时长
    #[builder(default = Duration::from_millis(DEFAULT_NOTIFY_DURATION_MS))]
    pub duration: Duration,
    /// 悬停时是否保持
    #[builder(default = true)]
    pub keep_alive_on_hover: bool,
}

/// 一条已发出的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub options: NotifyOptions,
}

/// 通知通道
///
/// UI 为单线程事件循环，故 future 不要求 `Send`。
#[async_trait(?Send)]
pub trait NotificationSink {
    /// 以指定级别展示一条通知
    async fn notify(&self, level: NotifyLevel, options: NotifyOptions) -> Result<(), NotifyError>;

    async fn error(&self, options: NotifyOptions) -> Result<(), NotifyError> {
        self.notify(NotifyLevel::Error, options).await
    }

    async fn success(&self, options: NotifyOptions) -> Result<(), NotifyError> {
        self.notify(NotifyLevel::Success, options).await
    }

    async fn info(&self, options: NotifyOptions) -> Result<(), NotifyError> {
        self.notify(NotifyLevel::Info, options).await
    }

    async fn warning(&self, options: NotifyOptions) -> Result<(), NotifyError> {
        self.notify(NotifyLevel::Warning, options).await
    }
}
