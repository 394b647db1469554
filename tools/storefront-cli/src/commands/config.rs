//! Config command.

use anyhow::Result;

use crate::context::Context;

/// Run the config command.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("Config file", &path.display().to_string()),
        None => ctx.output.kv("Config file", "(defaults)"),
    }
    println!();
    print!("{}", ctx.config.to_toml()?);

    Ok(())
}
