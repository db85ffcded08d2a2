//! Chat command implementations

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use finmate_core::{
    format_currency, format_pct, ChartPayload, ChatAction, ChatContext, ClassifiedResponse,
    IntentClassifier, ThemeStore,
};

use super::{load_profile, truncate};

/// Classify a single message and print the response
pub fn cmd_chat_once(
    profile_path: Option<&Path>,
    store: &dyn ThemeStore,
    message: &str,
    json: bool,
) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let ctx = ChatContext::from_profile(&profile);
    let classifier = IntentClassifier::new(store);

    let response = classifier.classify(message, &ctx);
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }
    Ok(())
}

/// Interactive session reading messages from stdin until EOF or "exit"
pub fn cmd_chat_repl(profile_path: Option<&Path>, store: &dyn ThemeStore) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let mut ctx = ChatContext::from_profile(&profile);
    let classifier = IntentClassifier::new(store);

    println!();
    println!("💬 FinMate chat. Type a message, or 'exit' to leave.");

    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let response = classifier.classify(message, &ctx);
        print_response(&response);

        // The rolling memory is what lets terse follow-ups resolve
        ctx.memory.push(format!("user: {}", message));
        ctx.memory.push(format!("bot: {}", response.text));
    }

    Ok(())
}

/// Render a classified response the way the web UI would
fn print_response(response: &ClassifiedResponse) {
    println!();
    println!("🤖 {}", response.text);

    if let Some(ref chart) = response.chart {
        print_chart(chart);
    }

    if let Some(ref action) = response.action {
        match action {
            ChatAction::Navigate { path } => println!("   ↪ navigating to {}", path),
            ChatAction::Theme { theme } => println!("   ↪ theme is now {}", theme),
        }
    }
}

fn print_chart(chart: &ChartPayload) {
    let percent_values = match chart {
        ChartPayload::Bar { y_key, .. }
        | ChartPayload::Line { y_key, .. }
        | ChartPayload::Pie { y_key, .. } => y_key.contains("pct"),
    };

    for row in chart.rows() {
        let value = if percent_values {
            format_pct(row.value)
        } else {
            format_currency(row.value)
        };
        println!("   {:25} │ {:>12}", truncate(&row.label, 25), value);
    }
}
