//! 运行器配置
//!
//! 可随应用设置一起以 JSON 持久化，缺省字段取默认值。
//!
use crate::notification::DEFAULT_NOTIFY_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 调用方未设置 `err_msg` 时使用的错误前缀
pub const DEFAULT_ERR_MSG: &str = "请求失败";

/// 错误前缀与错误内容之间的分隔符（全角冒号）
pub const ERR_MSG_SEPARATOR: &str = "：";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// 默认错误前缀
    pub default_err_msg: String,
    /// 兜底错误通知的展示时长（毫秒）
    pub notify_duration_ms: u64,
    /// 兜底错误通知在悬停时是否保持
    pub keep_alive_on_hover: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            default_err_msg: DEFAULT_ERR_MSG.to_string(),
            notify_duration_ms: DEFAULT_NOTIFY_DURATION_MS,
            keep_alive_on_hover: true,
        }
    }
}

impl RunnerConfig {
    pub fn notify_duration(&self) -> Duration {
        Duration::from_millis(self.notify_duration_ms)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
