// cli.rs - Command-line interface configuration
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::core::{FormatPolicy, IdleLoop};

#[derive(Parser, Debug, Clone)]
#[command(name = "fb-demo")]
#[command(about = "Draws a static demo screen directly into a Linux framebuffer", long_about = None)]
pub struct Cli {
    /// Framebuffer device node
    #[arg(long, default_value = "/dev/fb0")]
    pub device: PathBuf,

    /// Idle polling interval in milliseconds
    #[arg(long = "poll-ms", default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_ms: u64,

    /// Seconds between status lines (0 disables them)
    #[arg(long = "heartbeat-secs", default_value_t = 5)]
    pub heartbeat_secs: u64,

    /// Accept pixel depths other than 32 bits per pixel
    #[arg(long = "allow-any-bpp", default_value = "false")]
    pub allow_any_bpp: bool,

    /// Print the display geometry as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Disable console progress output
    #[arg(long, short, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    pub fn format_policy(&self) -> FormatPolicy {
        if self.allow_any_bpp {
            FormatPolicy::Any
        } else {
            FormatPolicy::Require32
        }
    }

    /// Default `RUST_LOG` filter; `--quiet` also silences info-level logs
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    pub fn idle_loop(&self) -> IdleLoop {
        IdleLoop::new(
            Duration::from_millis(self.poll_ms),
            Duration::from_secs(self.heartbeat_secs),
        )
    }
}
