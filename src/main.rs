use clap::{Parser, Subcommand};
use launchpad::commands;
use launchpad::readline;
use launchpad::CliContext;
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = launchpad::logging::init();
    let ctx = CliContext::new();

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.shutdown().await;
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "launch countdown and signup list")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the live countdown
    Countdown,
    /// Stop the live countdown
    Stop,
    /// Show the remaining time once
    Status,
    Subscribe {
        #[arg(short, long)]
        email: String,
    },
    Subscribers,
    Config,
    SetTarget {
        #[arg(short, long)]
        target: String,
    },
    Exit,
}

fn parse_line(line: &str) -> Result<Cli, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "launchpad".to_string());
    Cli::try_parse_from(args).map_err(|e| e.to_string())
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let cli = parse_line(line)?;

    match &cli.command {
        Some(Commands::Countdown) => commands::start_countdown(ctx).await?,
        Some(Commands::Stop) => commands::stop_countdown(ctx).await,
        Some(Commands::Status) => commands::show_status(ctx).await?,
        Some(Commands::Subscribe { email }) => commands::subscribe(email, ctx).await?,
        Some(Commands::Subscribers) => commands::list_subscribers(ctx).await?,
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::SetTarget { target }) => commands::set_target(target, ctx).await?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_arguments() {
        let cli = parse_line(r#"set-target --target "2026-01-01T00:00:00+01:00""#).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::SetTarget { ref target }) if target == "2026-01-01T00:00:00+01:00"
        ));

        let cli = parse_line("subscribe -e guest@example.com").unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Subscribe { ref email }) if email == "guest@example.com"
        ));
    }

    #[test]
    fn rejects_bad_quoting_and_unknown_commands() {
        assert!(parse_line(r#"subscribe --email "unterminated"#).is_err());
        assert!(parse_line("launch-now").is_err());
    }
}
