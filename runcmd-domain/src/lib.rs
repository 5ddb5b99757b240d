//! 命令结果契约层（runcmd-domain）
//!
//! 定义后端命令与 UI 调用层之间唯一的结构化契约：
//! - 结果模型（`result_model`）：成功/失败二选一的判别联合 `ResultModel`；
//! - 错误（`error`）：命令错误载荷 `CommandError` 与调用通道错误 `InvokeError`；
//! - 线格式（`wire`）：从桥接层拿到的 JSON 值与 `ResultModel` 之间的转换。
//!
//! 本 crate 不关心命令如何被调用、结果如何展示，只约束结果的形状。
//!
pub mod error;
pub mod result_model;
pub mod wire;

pub use error::{CommandError, InvokeError};
pub use result_model::ResultModel;
