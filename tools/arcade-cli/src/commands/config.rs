//! Configuration management commands.

use anyhow::{bail, Result};
use arcade_core::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            StorefrontConfig::default().save(&path)?;
            ctx.output
                .success(&format!("Wrote default configuration to {}", path.display()));
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, using defaults"),
    }

    let config = &ctx.config;
    ctx.output.info("[cart]");
    ctx.output.kv("storage_key", &config.cart.storage_key);
    ctx.output.kv(
        "storage_dir",
        &config
            .cart
            .storage_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "(in memory)".to_string()),
    );

    ctx.output.info("[carousel]");
    ctx.output.kv(
        "autoplay_interval_ms",
        &config.carousel.autoplay_interval_ms.to_string(),
    );
    ctx.output.kv(
        "swipe_threshold_px",
        &config.carousel.swipe_threshold_px.to_string(),
    );
    ctx.output.kv(
        "slide_count",
        &config
            .carousel
            .slide_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(one per game)".to_string()),
    );

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_str());
    ctx.output
        .kv("format", &format!("{:?}", config.logging.format).to_lowercase());
    Ok(())
}
