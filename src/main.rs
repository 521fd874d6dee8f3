use anyhow::Result;
use clap::{Parser, Subcommand};

use usage_dash::commands;
use usage_dash::config::ApiConfig;

#[derive(Parser)]
#[command(name = "usage-dash")]
#[command(about = "设备使用统计仪表盘客户端", long_about = None)]
struct Cli {
    /// 覆盖 API 基础地址
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 查询使用统计
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },

    /// 列出设备目录与客户端 IP
    Devices {
        /// 在列表头部加入总览虚拟设备
        #[arg(long)]
        with_summary: bool,
    },
}

#[derive(Subcommand)]
enum StatsAction {
    /// 日统计（24 小时分桶）
    Daily {
        #[arg(long, default_value = "summary")]
        device: String,
        /// 指定日期 YYYY-MM-DD，缺省为今天
        #[arg(long)]
        date: Option<String>,
        /// single（按设备、含应用明细）或 eyetime（聚合）
        #[arg(long, default_value = "single")]
        mode: String,
    },
    /// 周统计（按天分桶）
    Weekly {
        #[arg(long, default_value = "summary")]
        device: String,
        /// 周偏移量，0 为本周，负数为过去
        #[arg(long, default_value_t = 0)]
        offset: i64,
        #[arg(long, default_value = "single")]
        mode: String,
    },
    /// 月统计（按周分桶）
    Monthly {
        #[arg(long, default_value = "summary")]
        device: String,
        /// 月偏移量，0 为本月，负数为过去
        #[arg(long, default_value_t = 0)]
        offset: i64,
        #[arg(long, default_value = "single")]
        mode: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::resolve(cli.api_base);

    match cli.command {
        Commands::Stats { action } => match action {
            StatsAction::Daily { device, date, mode } => {
                commands::stats::run(&config, "daily", &device, 0, date, &mode).await?
            }
            StatsAction::Weekly {
                device,
                offset,
                mode,
            } => commands::stats::run(&config, "weekly", &device, offset, None, &mode).await?,
            StatsAction::Monthly {
                device,
                offset,
                mode,
            } => commands::stats::run(&config, "monthly", &device, offset, None, &mode).await?,
        },
        Commands::Devices { with_summary } => commands::devices::run(&config, with_summary).await?,
    }

    Ok(())
}
