use launchpad_core::context::AppConfigExt;
use launchpad_core::{
    CountdownDisplay, CountdownEngine, CountdownEvent, SignupForm, TargetInstant,
};
use std::io::Write;

use crate::CliContext;

/// Start ticking and print every snapshot until launch or `stop`.
pub async fn start_countdown(ctx: &CliContext) -> Result<(), String> {
    let launch = ctx.config.read().await.launch.clone();
    let engine = CountdownEngine::from_config(&launch).map_err(|e| e.to_string())?;
    if engine.peek().reached {
        println!("{}", launch.launched_title);
        return Ok(());
    }

    println!("Counting down to {}", engine.target());
    let mut display = CountdownDisplay::from_config(&launch);
    let (handle, mut rx) = engine.subscribe();

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                CountdownEvent::Tick(snapshot) => {
                    display.render(&snapshot);
                    println!("{display}");
                }
                CountdownEvent::Reached => {
                    display.mark_launched();
                    println!("{}", display.title);
                }
            }
        }
    });

    ctx.tasks.lock().await.replace_countdown(handle);
    Ok(())
}

pub async fn stop_countdown(ctx: &CliContext) {
    if ctx.tasks.lock().await.stop_countdown() {
        println!("Countdown stopped");
    } else {
        println!("No countdown running");
    }
}

/// One-shot snapshot without starting the timer.
pub async fn show_status(ctx: &CliContext) -> Result<(), String> {
    let launch = ctx.config.read().await.launch.clone();
    let engine = CountdownEngine::from_config(&launch).map_err(|e| e.to_string())?;

    let snapshot = engine.peek();
    let mut display = CountdownDisplay::from_config(&launch);
    display.render(&snapshot);
    if snapshot.reached {
        display.mark_launched();
    }

    let running = ctx.tasks.lock().await.countdown_running();
    println!("{display}");
    println!("Target: {}", engine.target());
    println!("Ticking: {}", if running { "yes" } else { "no" });
    Ok(())
}

pub async fn subscribe(email: &str, ctx: &CliContext) -> Result<(), String> {
    let signup = ctx.config.read().await.signup.clone();
    let form = SignupForm::from_config(&signup).map_err(|e| e.to_string())?;

    println!("Submitting...");
    let outcome = form.submit(email).await.map_err(|e| e.to_string())?;
    println!("{}", outcome.message());
    Ok(())
}

pub async fn list_subscribers(ctx: &CliContext) -> Result<(), String> {
    let signup = ctx.config.read().await.signup.clone();
    let form = SignupForm::from_config(&signup).map_err(|e| e.to_string())?;
    let emails = form.subscribers().emails().map_err(|e| e.to_string())?;

    if emails.is_empty() {
        println!("No subscribers yet");
        return Ok(());
    }

    for email in &emails {
        println!("{email}");
    }
    println!("\nTotal: {} subscribers", emails.len());
    Ok(())
}

pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    if let Some(path) = launchpad_core::AppConfig::path() {
        println!("Config file: {}", path.display());
    }

    println!("{:<20} {}", "target", config.launch.target);
    println!("{:<20} {}", "cadence_ms", config.launch.cadence_ms);
    println!("{:<20} {}", "counting_title", config.launch.counting_title);
    println!("{:<20} {}", "launched_title", config.launch.launched_title);
    println!(
        "{:<20} {}",
        "storage_path",
        config.signup.storage_path.as_deref().unwrap_or("(default)")
    );
    println!("{:<20} {}", "storage_key", config.signup.storage_key);
    println!("{:<20} {}", "submit_delay_ms", config.signup.submit_delay_ms);
    println!("{:<20} {}", "success_rate", config.signup.success_rate);
}

/// Validate and persist a new target. A running countdown keeps its old target.
pub async fn set_target(target: &str, ctx: &CliContext) -> Result<(), String> {
    let parsed = TargetInstant::parse(target).map_err(|e| e.to_string())?;

    let mut config = ctx.config.write().await;
    config.launch.target = parsed.to_string();
    config.save().map_err(|e| e.to_string())?;

    println!("Target set to {parsed}");
    if ctx.tasks.lock().await.countdown_running() {
        println!("Restart the countdown to use the new target");
    }
    Ok(())
}

pub fn exit() {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "quitting...");
    let _ = stdout.flush();
}
