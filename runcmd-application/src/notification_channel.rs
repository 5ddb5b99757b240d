//! 通道版通知通道
//!
//! 把通知转发到 `futures::channel::mpsc`，由 UI 任务在另一端消费并渲染。
//! 接收端被丢弃后发送返回 `NotifyError::Closed`。
//!
use crate::error::NotifyError;
use crate::notification::{Notification, NotificationSink, NotifyLevel, NotifyOptions};
use async_trait::async_trait;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub struct ChannelNotificationSink {
    tx: UnboundedSender<Notification>,
}

impl ChannelNotificationSink {
    /// 创建通道，返回发送端 sink 与供 UI 消费的接收端
    pub fn unbounded() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[async_trait(?Send)]
impl NotificationSink for ChannelNotificationSink {
    async fn notify(&self, level: NotifyLevel, options: NotifyOptions) -> Result<(), NotifyError> {
        self.tx
            .unbounded_send(Notification { level, options })
            .map_err(|_| NotifyError::Closed)
    }
}
