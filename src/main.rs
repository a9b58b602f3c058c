use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::debug;

use fb_demo::cli::Cli;
use fb_demo::core::{execute, ShutdownFlag, Surface, SurfaceError};
use fb_demo::demo::{demo_layout, LAYOUT_DESCRIPTION};
use fb_demo::PixelBuffer;

// === Console ===

/// Progress line on stdout unless `--quiet`
macro_rules! say {
    ($cli:expr, $($arg:tt)*) => {
        if !$cli.quiet {
            println!($($arg)*);
        }
    };
}

const RULE: &str = "========================================";

fn run(cli: &Cli) -> Result<()> {
    let shutdown = ShutdownFlag::new();
    shutdown
        .install_signal_handler()
        .context("failed to install termination signal handler")?;

    say!(cli, "\n{}", RULE);
    say!(cli, "  Framebuffer Demo");
    say!(cli, "  Started {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    say!(cli, "{}\n", RULE);

    let mut surface = Surface::open_with(&cli.device, cli.format_policy())?;
    say!(cli, "✓ Framebuffer device opened");
    say!(cli, "✓ Display info:");
    say!(cli, "  Resolution: {}x{}", surface.width(), surface.height());
    say!(cli, "  Bits per pixel: {}", surface.bits_per_pixel());
    say!(cli, "  Line length: {} bytes", surface.line_length());
    say!(cli, "✓ Framebuffer mapped to memory ({} bytes)", surface.len());

    if cli.json {
        let geometry = serde_json::to_string_pretty(surface.geometry())
            .context("failed to encode display geometry")?;
        println!("{}", geometry);
    }

    say!(cli, "\nCreating demo UI...");
    let layout = demo_layout(surface.geometry());
    execute(&mut surface, &layout);
    say!(cli, "UI drawn successfully!");

    say!(cli, "\nDemo UI is running. Press Ctrl+C to exit.");
    say!(cli, "----------------------------------------");
    say!(cli, "Display Information:");
    for line in LAYOUT_DESCRIPTION {
        say!(cli, "  - {}", line);
    }
    say!(cli, "{}\n", RULE);

    let ticks = cli.idle_loop().run(&shutdown, |elapsed| {
        say!(cli, "Status: Running for {} seconds...", elapsed.as_secs());
    });
    debug!("idle for {} polls", ticks);

    say!(cli, "\nShutting down...");
    surface.close();
    say!(cli, "Goodbye!");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(SurfaceError::DeviceUnavailable { path, .. }) = err.downcast_ref::<SurfaceError>() {
                eprintln!(
                    "Make sure {} exists and you have permission to access it",
                    path.display()
                );
            }
            ExitCode::from(1)
        }
    }
}
