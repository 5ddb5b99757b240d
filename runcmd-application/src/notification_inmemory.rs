//! 内存版与空实现的通知通道
//!
//! - `InMemoryNotificationSink`：按顺序记录所有通知，适用于无界面运行与测试；
//! - `NoopNotificationSink`：直接丢弃。
//!
use crate::error::NotifyError;
use crate::notification::{Notification, NotificationSink, NotifyLevel, NotifyOptions};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct InMemoryNotificationSink {
    records: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录通知的快照（按发出顺序）
    pub fn notifications(&self) -> Vec<Notification> {
        self.records().clone()
    }

    /// 仅错误级别的通知
    pub fn errors(&self) -> Vec<Notification> {
        self.records()
            .iter()
            .filter(|n| n.level == NotifyLevel::Error)
            .cloned()
            .collect()
    }

    /// 取走全部记录
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.records())
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn records(&self) -> MutexGuard<'_, Vec<Notification>> {
        // 记录只做追加，中毒后的数据仍然可用
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait(?Send)]
impl NotificationSink for InMemoryNotificationSink {
    async fn notify(&self, level: NotifyLevel, options: NotifyOptions) -> Result<(), NotifyError> {
        self.records().push(Notification { level, options });
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotificationSink;

#[async_trait(?Send)]
impl NotificationSink for NoopNotificationSink {
    async fn notify(&self, _level: NotifyLevel, _options: NotifyOptions) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn options(content: &str) -> NotifyOptions {
        NotifyOptions::builder().content(content).build()
    }

    #[test]
    fn records_every_level_in_order() {
        let sink = InMemoryNotificationSink::new();
        block_on(async {
            sink.success(options("ok")).await.unwrap();
            sink.error(options("bad")).await.unwrap();
            sink.info(options("fyi")).await.unwrap();
            sink.warning(options("careful")).await.unwrap();
        });

        let levels: Vec<_> = sink.notifications().iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            vec![
                NotifyLevel::Success,
                NotifyLevel::Error,
                NotifyLevel::Info,
                NotifyLevel::Warning
            ]
        );

        let errors = sink.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].options.content, "bad");
    }

    #[test]
    fn take_drains_records() {
        let sink = InMemoryNotificationSink::new();
        block_on(sink.error(options("bad"))).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn noop_accepts_everything() {
        assert!(block_on(NoopNotificationSink.error(options("ignored"))).is_ok());
    }
}
