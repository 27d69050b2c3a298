use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use propline_store::{EnvResolver, Properties};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Get(args) => cmd_get(args, &config, &cli.format),
        Command::Set(args) => cmd_set(args, &config),
        Command::Remove(args) => cmd_remove(args, &config),
        Command::List(args) => cmd_list(args, &config, &cli.format),
        Command::Check(args) => cmd_check(args, &config, &cli.format),
    }
}

fn open(path: &Path, config: &CliConfig) -> anyhow::Result<Properties> {
    let props = Properties::with_config(config.format.clone());
    props
        .load_path(path)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(props)
}

fn open_or_empty(path: &Path, config: &CliConfig) -> anyhow::Result<Properties> {
    if path.exists() {
        open(path, config)
    } else {
        Ok(Properties::with_config(config.format.clone()))
    }
}

fn enable_env(props: &Properties, requested: bool, config: &CliConfig) {
    if requested || config.resolve_env {
        props.add_resolver(Arc::new(EnvResolver::new()));
    }
}

fn cmd_get(args: GetArgs, config: &CliConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let props = open(&args.file, config)?;
    enable_env(&props, args.resolve_env, config);

    let value = match &args.default {
        Some(default) => props.get_or_default(&args.key, default),
        None => props.get(&args.key)?,
    };

    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "key": args.key, "value": value })),
    }
    Ok(())
}

/// Comment and continuation markers plus line breaks.
const UNWRITABLE_CHARS: &[char] = &['\\', '#', '!', '\n', '\r'];

fn check_writable(args: &SetArgs) -> anyhow::Result<()> {
    if args.key.contains('=') {
        anyhow::bail!("key {:?} contains '='", args.key);
    }
    for (what, text) in [("key", &args.key), ("value", &args.value)] {
        if let Some(c) = text.chars().find(|c| UNWRITABLE_CHARS.contains(c)) {
            anyhow::bail!("{what} {text:?} contains {c:?}, which cannot be read back from a properties file");
        }
    }
    Ok(())
}

fn cmd_set(args: SetArgs, config: &CliConfig) -> anyhow::Result<()> {
    check_writable(&args)?;
    let props = open_or_empty(&args.file, config)?;
    let existed = props.contains(&args.key);
    let old = props.put(&args.key, args.value.as_str())?;
    props
        .store_path(&args.file)
        .with_context(|| format!("writing {}", args.file.display()))?;

    if existed {
        println!("{} {} = {} (was {})", "✓".green().bold(), args.key.bold(), args.value, old.dimmed());
    } else {
        println!("{} {} = {}", "✓".green().bold(), args.key.bold(), args.value);
    }
    Ok(())
}

fn cmd_remove(args: RemoveArgs, config: &CliConfig) -> anyhow::Result<()> {
    let props = open(&args.file, config)?;
    if !props.contains(&args.key) {
        println!("{} not set", args.key.yellow());
        return Ok(());
    }

    let old = props.remove(&args.key);
    props
        .store_path(&args.file)
        .with_context(|| format!("writing {}", args.file.display()))?;
    println!("{} Removed {} (was {})", "✓".green().bold(), args.key.bold(), old.dimmed());
    Ok(())
}

fn cmd_list(args: ListArgs, config: &CliConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let props = open(&args.file, config)?;
    enable_env(&props, args.resolve_env, config);

    let entries: BTreeMap<String, String> = props
        .keys()
        .into_iter()
        .map(|key| {
            let value = props.get_or_default(&key, "");
            (key, value)
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for (key, value) in &entries {
                println!("{}={}", key.cyan(), value);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, config: &CliConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let props = Properties::with_config(config.format.clone());
    let report = props
        .load_path(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;

    match format {
        OutputFormat::Text => {
            println!("{} {}", "File:".bold(), args.file.display());
            println!("  Lines: {}", report.lines);
            println!("  Keys: {}", props.count().to_string().green());
            if report.skipped > 0 {
                println!("  Skipped: {}", report.skipped.to_string().yellow());
            } else {
                println!("  Skipped: {}", "0".green());
            }
            if report.unterminated_continuation {
                println!("  {} input ends inside a continuation", "warning:".yellow().bold());
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "file": args.file.display().to_string(),
                "lines": report.lines,
                "entries": report.entries,
                "keys": props.count(),
                "skipped": report.skipped,
                "unterminated_continuation": report.unterminated_continuation,
            })
        ),
    }
    Ok(())
}
