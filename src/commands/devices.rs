//! `usage-dash devices` 子命令

use anyhow::Result;
use tracing::warn;

use crate::config::ApiConfig;
use crate::services::devices::{has_real_devices, DeviceDirectory};

/// 打印设备目录与客户端 IP
pub async fn run(config: &ApiConfig, with_summary: bool) -> Result<()> {
    let directory = DeviceDirectory::new(config);

    let devices = directory.fetch_devices(with_summary).await?;

    // IP 获取失败不影响设备列表展示
    let client_ip = match directory.fetch_client_ip().await {
        Ok(ip) => ip,
        Err(err) => {
            warn!(%err, "获取IP地址失败");
            "获取失败".to_string()
        }
    };

    println!("客户端 IP: {}", client_ip);
    println!();

    if devices.is_empty() {
        println!("暂无设备");
        return Ok(());
    }

    println!("设备列表:");
    for device in &devices {
        match &device.current_app {
            Some(app) => println!("  {:<16} 当前应用: {}", device.device, app),
            None => println!("  {}", device.device),
        }
    }

    if !has_real_devices(&devices) {
        println!();
        println!("（仅有总览视图，暂无真实设备上报）");
    }

    Ok(())
}
