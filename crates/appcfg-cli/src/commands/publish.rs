//! `appcfg publish-config`

use std::path::Path;

use appcfg_fs::ProjectPath;
use appcfg_publish::{ManifestBundle, PublishConfigResolver, PublishOptions};
use colored::Colorize;

use crate::error::Result;

/// Resolve and print the publish manifest.
pub fn run_publish_config(path: &Path, release_channel: Option<String>, json: bool) -> Result<()> {
    let root = ProjectPath::new(path);
    let mut options = match release_channel {
        Some(channel) => PublishOptions::with_release_channel(channel),
        None => PublishOptions::new(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let bundle = runtime.block_on(PublishConfigResolver::new().resolve(&root, &mut options))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    let channel = options
        .release_channel
        .as_ref()
        .and_then(|v| v.as_str())
        .unwrap_or(appcfg_publish::DEFAULT_RELEASE_CHANNEL);
    print_summary(&bundle, channel);
    Ok(())
}

fn print_summary(bundle: &ManifestBundle, channel: &str) {
    let exp = &bundle.exp;

    println!("{}", "Publish Manifest".bold());
    println!();
    println!("  {:<18} {}", "Name:".dimmed(), exp.name.as_deref().unwrap_or("(none)"));
    println!("  {:<18} {}", "Slug:".dimmed(), exp.slug.as_deref().unwrap_or("(none)"));
    println!("  {:<18} {}", "Version:".dimmed(), exp.version.as_deref().unwrap_or("(none)"));
    println!("  {:<18} {}", "Release channel:".dimmed(), channel.cyan());

    match (&exp.runtime_version, &exp.sdk_version) {
        (Some(runtime), _) => println!("  {:<18} {}", "Runtime version:".dimmed(), runtime),
        (None, Some(sdk)) => println!("  {:<18} {}", "SDK version:".dimmed(), sdk),
        (None, None) => println!("  {:<18} {}", "SDK version:".dimmed(), "(none)".dimmed()),
    }

    let locales = exp.locales.as_ref().map(|l| l.len()).unwrap_or(0);
    println!("  {:<18} {}", "Locales:".dimmed(), locales);
    println!(
        "  {:<18} {}",
        "Hooks:".dimmed(),
        if bundle.hooks.is_some() { "yes".green() } else { "no".dimmed() }
    );
}
