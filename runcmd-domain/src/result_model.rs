//! 结果模型（ResultModel）
//!
//! 后端命令必须满足的判别联合：要么 `Ok` 携带数据，要么 `Err` 携带错误，二者互斥。
//! 线格式以 `status` 字段区分：
//!
//! ```json
//! {"status":"ok","data":42}
//! {"status":"err","error":"disk full"}
//! ```
//!
use crate::error::CommandError;
use serde::{Deserialize, Serialize};

/// 命令结果：成功携带 `data`，失败携带 `error`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultModel<T, E = CommandError> {
    Ok { data: T },
    Err { error: E },
}

impl<T, E> ResultModel<T, E> {
    pub fn success(data: T) -> Self {
        Self::Ok { data }
    }

    pub fn failure(error: E) -> Self {
        Self::Err { error }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. })
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok { data } => Some(data),
            Self::Err { .. } => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { error } => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResultModel<U, E> {
        match self {
            Self::Ok { data } => ResultModel::Ok { data: f(data) },
            Self::Err { error } => ResultModel::Err { error },
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> ResultModel<T, F> {
        match self {
            Self::Ok { data } => ResultModel::Ok { data },
            Self::Err { error } => ResultModel::Err { error: f(error) },
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok { data } => Ok(data),
            Self::Err { error } => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for ResultModel<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Ok { data },
            Err(error) => Self::Err { error },
        }
    }
}

impl<T, E> From<ResultModel<T, E>> for Result<T, E> {
    fn from(model: ResultModel<T, E>) -> Self {
        model.into_result()
    }
}
