#![forbid(unsafe_code)]

//! NatCap TEEMs static exporter entry point.

use teems_core::logging::LogConfig;
use teems_site::cli;
use teems_site::export::{SiteConfig, export_site};
use time::OffsetDateTime;

fn main() {
    let opts = cli::Opts::parse();

    let mut log_config = LogConfig::from_env();
    log_config.format = opts.log_format;
    if let Err(e) = log_config.install() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = SiteConfig {
        out_dir: opts.out_dir,
        base_url: opts.base_url,
        build_time: OffsetDateTime::now_utc(),
    };
    match export_site(&config) {
        Ok(report) => {
            println!(
                "Exported {} files to {}",
                report.files.len(),
                config.out_dir.display()
            );
        }
        Err(e) => {
            eprintln!("Export failed: {e}");
            std::process::exit(1);
        }
    }
}
