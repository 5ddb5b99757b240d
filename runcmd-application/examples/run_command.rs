use futures::StreamExt;
use runcmd_application::{
    ChannelNotificationSink, CommandError, CommandRunner, ResultModel, RunConfig,
};
use runcmd_domain::{InvokeError, wire};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Deserialize)]
struct BookInfo {
    name: String,
    volumes: u32,
}

// 模拟桥接层：按书号返回未经类型化的 JSON
async fn invoke_get_book_info(book_id: &str) -> Result<ResultModel<BookInfo>, InvokeError> {
    let raw = match book_id {
        "2013" => json!({"status": "ok", "data": {"name": "狼与香辛料", "volumes": 24}}),
        "404" => json!({"status": "err", "error": "book not found"}),
        _ => return Err(InvokeError::transport("ipc channel closed")),
    };
    wire::decode(raw)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (sink, mut notifications) = ChannelNotificationSink::unbounded();
    let runner = CommandRunner::new(Arc::new(sink));

    let info = runner
        .run(
            RunConfig::new(|| invoke_get_book_info("2013"))
                .on_success(|info: &BookInfo| {
                    println!("loaded {} ({} volumes)", info.name, info.volumes)
                })
                .on_finally(|| println!("loading spinner hidden"))
                .err_msg("获取书籍信息失败"),
        )
        .await;
    println!("returned: {info:?}");

    // 未设置 on_error -> 默认错误通知
    runner
        .run(RunConfig::new(|| invoke_get_book_info("404")).err_msg("获取书籍信息失败"))
        .await;

    // 设置 on_error -> 由调用方自行处理，不发通知
    runner
        .run(
            RunConfig::new(|| invoke_get_book_info("???"))
                .on_error(|err: CommandError| println!("handled by caller: {err}")),
        )
        .await;

    drop(runner);
    while let Some(notification) = notifications.next().await {
        println!("[{:?}] {}", notification.level, notification.options.content);
    }
}
