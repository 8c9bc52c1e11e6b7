//! Tasklet - 内存待办事项 CRUD 服务
//!
//! - Domain: todo/ (Bounded Context)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use tasklet::config::{load_config, print_config};
use tasklet::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tasklet::infrastructure::memory::InMemoryTodoRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},tasklet={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Tasklet - 内存待办事项 CRUD 服务");
    print_config(&config);

    // 创建内存存储
    let todo_repo = InMemoryTodoRepository::new().arc();

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(todo_repo);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
