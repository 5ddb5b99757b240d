//! 命令层错误定义
//!
//! - `CommandError`：失败结果携带的不透明错误载荷，原样转交失败回调，仅在拼接默认通知时字符串化；
//! - `InvokeError`：命令未能产出 `ResultModel` 时的调用通道错误（传输、解码）。
//!
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// 命令错误载荷
///
/// 序列化为纯字符串，与后端命令返回的错误形状一致。
/// 注意：不实现 `std::error::Error`，否则会与下面的通用 `From` 转换冲突。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandError(pub String);

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    /// 将 panic 载荷规整为命令错误
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<&'static str>() {
            Ok(msg) => (*msg).to_string(),
            Err(payload) => match payload.downcast::<String>() {
                Ok(msg) => *msg,
                Err(_) => "command panicked".to_string(),
            },
        };
        Self(message)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// 任意可转换为 anyhow::Error 的错误都可以经 `?` 转为 CommandError，保留完整的 cause 链
impl<E> From<E> for CommandError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(format!("{:#}", err.into()))
    }
}

/// 调用通道错误：命令在产出 `ResultModel` 之前失败
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("transport error: {reason}")]
    Transport { reason: String },
    #[error("decode error: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

impl InvokeError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_message() {
        let err = CommandError::new("disk full");
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(err.message(), "disk full");
    }

    #[test]
    fn converts_from_std_errors_with_cause_chain() {
        let err: CommandError = anyhow::anyhow!("connection reset")
            .context("fetch book info")
            .into();
        assert_eq!(err.message(), "fetch book info: connection reset");

        let err: CommandError = InvokeError::transport("bridge unavailable").into();
        assert_eq!(err.message(), "transport error: bridge unavailable");
    }

    #[test]
    fn from_panic_renders_str_and_string_payloads() {
        let err = CommandError::from_panic(Box::new("boom"));
        assert_eq!(err.message(), "boom");

        let err = CommandError::from_panic(Box::new(format!("index {} out of range", 3)));
        assert_eq!(err.message(), "index 3 out of range");

        let err = CommandError::from_panic(Box::new(7_u8));
        assert_eq!(err.message(), "command panicked");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&CommandError::new("not found")).unwrap();
        assert_eq!(json, "\"not found\"");
    }
}
