//! revenue-runner: headless runner for the revenue projection model.
//!
//! Usage:
//!   revenue-runner --scenario scenario.json --set fee_fx=0.25 --monthly
//!   revenue-runner --json
//!   revenue-runner --ipc-mode
//!   revenue-runner --describe

use anyhow::{anyhow, bail, Result};
use revenue_core::{
    config::ParameterSet,
    param::ParamKey,
    report::Report,
    rounding::RoundingPolicy,
    session::{LineReply, Session},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    params:       &'a ParameterSet,
    #[serde(flatten)]
    report:       &'a Report,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--describe") {
        describe();
        return Ok(());
    }

    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let json = args.iter().any(|a| a == "--json");
    let rounding = match find_arg(&args, "--rounding") {
        Some(name) => RoundingPolicy::from_name(name)
            .ok_or_else(|| anyhow!("unknown rounding policy '{name}' (half-even | half-up)"))?,
        None => RoundingPolicy::default(),
    };

    let mut params = match find_arg(&args, "--scenario") {
        Some(path) => ParameterSet::load(path)?,
        None => ParameterSet::default(),
    };
    for assignment in args.windows(2).filter(|w| w[0] == "--set").map(|w| w[1].as_str()) {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("--set expects KEY=VALUE, got '{assignment}'");
        };
        params.set_by_name(name.trim(), value)?;
    }
    if args.iter().any(|a| a == "--monthly") {
        params.annual_view = false;
    }

    let mut session = Session::new(params, rounding)?;

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else if json {
        let report = session.report();
        let out = JsonReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            params:       session.params(),
            report:       &report,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Revenue projection by business line");
        println!();
        println!("{}", session.report());
    }

    Ok(())
}

fn run_ipc_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        match session.handle_line(&buffer)? {
            LineReply::Skip => continue,
            LineReply::Quit => break,
            LineReply::Reply(value) => writeln!(stdout, "{value}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}

fn describe() {
    println!("{:<30} {:>10} {:>10} {:>10} {:>14}  label", "name", "min", "max", "step", "default");
    for key in ParamKey::ALL {
        let spec = key.spec();
        let max = spec.max.map(|m| m.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:<30} {:>10} {:>10} {:>10} {:>14}  {}",
            key.name(),
            spec.min,
            max,
            spec.step,
            spec.default,
            spec.label
        );
    }
    println!("{:<30} {:>10} {:>10} {:>10} {:>14}  Show annual figures", "annual_view", "-", "-", "-", "true");
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
