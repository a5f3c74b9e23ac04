use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use hboard::config::{Config, ThemeMode};
use hboard::demo;

#[derive(Parser, Debug)]
#[command(name = "hboard")]
#[command(version, about = "Novelty virtual keyboard that can only type the letter H")]
struct Cli {
    /// Hide the space and shift keys (minimalist mode)
    #[arg(long, short = 'm', action = ArgAction::SetTrue)]
    minimalist: bool,

    /// Theme override (light, dark, or follow-system)
    #[arg(long, short = 't', value_name = "MODE")]
    theme: Option<String>,

    /// Disable haptic feedback for this run
    #[arg(long, action = ArgAction::SetTrue)]
    no_haptics: bool,

    /// Treat the system color scheme as dark
    #[arg(long, action = ArgAction::SetTrue)]
    dark: bool,

    /// Read demo commands from a file instead of stdin
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Command-line flags override the loaded config for this run only
    let mut config = Config::load();
    if cli.minimalist {
        config.keyboard.minimalist_mode = true;
    }
    if cli.no_haptics {
        config.keyboard.haptic_feedback = false;
    }
    if let Some(mode) = &cli.theme {
        match ThemeMode::parse(mode) {
            Some(theme) => config.keyboard.theme = theme,
            None => log::warn!("Unknown theme '{mode}', keeping configured value"),
        }
    }

    match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            demo::run(&config, cli.dark, BufReader::new(file), &mut io::stdout())?;
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                println!("hboard: the keyboard that only types H");
                println!();
                println!("Commands (one per line):");
                println!("  down|up|cancel <key>   raw pointer transitions");
                println!("  tap <key>              down followed by up");
                println!("  wait <ms>              advance time (long presses, repeats)");
                println!("  show                   print buffer, case, and key visuals");
                println!("  quit                   exit");
                println!();
                println!("Keys: h, backspace, space, return, shift");
                println!();
            }
            demo::run(&config, cli.dark, stdin.lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}
