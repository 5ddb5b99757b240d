//! 线格式转换
//!
//! 桥接层返回的是未经类型化的 JSON 值，这里负责与 `ResultModel` 互转。
//! 形状不符（缺少 `status`、未知标签、数据类型不匹配）一律视为 `InvokeError::Decode`。
//!
use crate::error::{CommandError, InvokeError};
use crate::result_model::ResultModel;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 解码桥接层返回的 JSON 值
pub fn decode<T>(value: Value) -> Result<ResultModel<T, CommandError>, InvokeError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

/// 解码原始 JSON 文本
pub fn decode_str<T>(raw: &str) -> Result<ResultModel<T, CommandError>, InvokeError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(raw)?)
}

/// 编码为桥接层的 JSON 值（后端侧或测试桩使用）
pub fn encode<T, E>(model: &ResultModel<T, E>) -> Result<Value, InvokeError>
where
    T: Serialize,
    E: Serialize,
{
    Ok(serde_json::to_value(model)?)
}
