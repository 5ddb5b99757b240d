use runcmd_domain::{CommandError, ResultModel};

/// 命令产出（CommandOutcome）
///
/// 命令 future 的输出需能归一为 `ResultModel<Payload, CommandError>`：
/// - `ResultModel` 本身：后端已建模的成功/失败；
/// - `Result<ResultModel, E>`：外层 `Err` 表示命令未能产出结果（传输、解码等），
///   与声明式失败走同一条失败路径。
pub trait CommandOutcome {
    /// 成功时携带的数据类型
    type Payload;

    fn into_result_model(self) -> ResultModel<Self::Payload, CommandError>;
}

impl<T> CommandOutcome for ResultModel<T, CommandError> {
    type Payload = T;

    fn into_result_model(self) -> ResultModel<T, CommandError> {
        self
    }
}

impl<T, E> CommandOutcome for Result<ResultModel<T, CommandError>, E>
where
    E: Into<CommandError>,
{
    type Payload = T;

    fn into_result_model(self) -> ResultModel<T, CommandError> {
        match self {
            Ok(model) => model,
            Err(err) => ResultModel::failure(err.into()),
        }
    }
}
