use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use rms_cli::{
    config::Config,
    database::{create_pool, run_migrations},
    menu,
    services::Services,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 菜单占用 stdout, 日志走 stderr
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stderr)
        .init();

    // 加载配置
    let config = Config::from_toml()?;

    // 创建数据库连接池
    let pool = create_pool(&config.database).await?;

    // 运行数据库迁移
    run_migrations(&pool).await?;

    let services = Services::new(pool);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = menu::run(&services, &mut stdin.lock(), &mut stdout.lock()).await;

    // 存储/IO 故障不在会话内恢复: 记录诊断后结束进程
    if let Err(err) = result {
        log::error!("session aborted: {err}");
        return Err(err.into());
    }
    Ok(())
}
