//! 命令调用层（runcmd-application）
//!
//! UI 侧调用后端异步命令的薄封装：执行命令、解包 `ResultModel`，
//! 并把结果转换为调用方提供的生命周期回调：
//! - `run_config`：单次调用的配置（命令本体与 on_success/on_error/on_finally/err_msg）；
//! - `command_runner`：执行与分发，未提供 on_error 时回退到通知通道；
//! - `notification`：通知通道协议及内存、通道、空实现；
//! - `config`：运行器级默认值（默认错误前缀、通知时长等）。
//!
pub mod command;
pub mod command_runner;
pub mod config;
pub mod error;
pub mod notification;
pub mod notification_channel;
pub mod notification_inmemory;
pub mod run_config;

pub use command::CommandOutcome;
pub use command_runner::CommandRunner;
pub use config::RunnerConfig;
pub use error::NotifyError;
pub use notification::{Notification, NotificationSink, NotifyLevel, NotifyOptions};
pub use notification_channel::ChannelNotificationSink;
pub use notification_inmemory::{InMemoryNotificationSink, NoopNotificationSink};
pub use run_config::RunConfig;
pub use runcmd_domain::{CommandError, ResultModel};
