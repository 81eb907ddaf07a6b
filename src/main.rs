//! MindTriage CLI
//!
//! Usage:
//!   mindtriage --text "your message"        # Single triage evaluation
//!   mindtriage --interactive                # Interactive chat session
//!   mindtriage --serve                      # HTTP API server
//!   mindtriage --text "..." --json          # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use mindtriage::core::{
    emergency_line, run_server, ActionHost, ConversationSession, LexiconStore, Reply,
    ResponseSelector, RiskScorer,
};
use mindtriage::types::{
    Action, ActionKind, Author, Message, ResourceCategory, RiskAnalysis, Severity,
};
use mindtriage::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "mindtriage",
    version = VERSION,
    about = "MindTriage - Score chat messages for mental-health risk and pick supportive replies",
    long_about = "MindTriage is a conversational risk-triage engine for student\n\
                  mental-health support. It scores free-text input against crisis,\n\
                  risk-factor, and sentiment lexicons, classifies a severity tier,\n\
                  and selects a localized reply with recommended actions.\n\n\
                  Modes:\n  \
                  --text         Single evaluation\n  \
                  --interactive  Chat session on stdin\n  \
                  --serve        HTTP API server mode\n\n\
                  Severity tiers:\n  \
                  LOW     - No concerning indicators\n  \
                  MEDIUM  - Sustained negative mood, worth a check-in\n  \
                  HIGH    - Significant distress, support recommended\n  \
                  CRISIS  - Crisis indicators, immediate intervention"
)]
struct Args {
    /// Message to triage (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive chat session - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Language code for the session (unknown codes fall back to en)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show trigger and risk-factor breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        run_serve(&args).await;
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Run single triage evaluation
fn run_single(text: &str, args: &Args) {
    let lexicons = LexiconStore::global();
    let scorer = RiskScorer::new();
    let selector = ResponseSelector::new();

    let analysis = scorer.score(text, &args.lang, lexicons);
    let reply = selector.select(&analysis, &args.lang, lexicons);

    if args.json {
        #[derive(serde::Serialize)]
        struct SingleOutput<'a> {
            analysis: &'a RiskAnalysis,
            reply: &'a Reply,
        }
        let out = SingleOutput {
            analysis: &analysis,
            reply: &reply,
        };
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("serialization failed: {}", e),
        }
        return;
    }

    print_analysis(&analysis, args.verbose);
    println!();
    println!("{}", reply.text);
    print_actions(&reply.actions, &args.lang);
}

/// Run interactive chat session
fn run_interactive(args: &Args) {
    let lexicons = LexiconStore::global();
    let mut session = ConversationSession::new(args.lang.clone(), lexicons);
    let mut host = TerminalHost;

    print_header();
    println!("Commands: /lang <code>, /offline, /online, /actions, quit");
    println!(
        "{}",
        lexicons.get(args.lang.as_str()).templates.disclaimer.dimmed()
    );
    println!();
    println!("{}", session.history()[0].text.cyan());
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&session);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Messages: {}", session.history().len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        if let Some(code) = line.strip_prefix("/lang ") {
            let code = code.trim();
            session.set_language(code);
            if !lexicons.supports(code) {
                println!(
                    "{}",
                    format!("unknown language '{}', using english templates", code).yellow()
                );
            }
            println!("{}", session.history()[0].text.cyan());
            continue;
        }
        match line {
            "/offline" => {
                session.go_offline();
                println!("{}", "connection lost - messages will queue".yellow());
                continue;
            }
            "/online" => {
                let queued = session.offline_queue().len();
                session.reconnect();
                println!(
                    "{}",
                    format!("reconnected - {} queued message(s) delivered", queued).green()
                );
                continue;
            }
            "/actions" => {
                dispatch_last_actions(&mut session, &mut host);
                continue;
            }
            _ => {}
        }

        let reply = session.submit_user_message(line).clone();

        if args.json {
            match serde_json::to_string(&reply) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("serialization failed: {}", e),
            }
        } else {
            print_reply(&reply, args.verbose);
        }
    }
}

/// Dispatch every action on the latest assistant reply
fn dispatch_last_actions(session: &mut ConversationSession<'_>, host: &mut TerminalHost) {
    let actions: Vec<Action> = session
        .history()
        .iter()
        .rev()
        .find(|m| m.author == Author::Assistant && m.actions.is_some())
        .and_then(|m| m.actions.clone())
        .unwrap_or_default();

    if actions.is_empty() {
        println!("{}", "no actions recommended yet".dimmed());
        return;
    }
    for action in &actions {
        println!("{}", format!("-> {}", action.label).bold());
        session.dispatch_action(action, host);
    }
}

/// ActionHost that narrates dispatches on the terminal
struct TerminalHost;

impl ActionHost for TerminalHost {
    fn dial_emergency(&mut self, number: &str) {
        println!("{}", format!("   dialing crisis helpline {}", number).red().bold());
    }

    fn open_booking(&mut self, urgent: bool) {
        let note = if urgent { " (urgent slot)" } else { "" };
        println!("{}", format!("   opening counselor booking{}", note).green());
    }

    fn open_resources(&mut self, category: ResourceCategory, urgent: bool) {
        let filter = match category {
            ResourceCategory::Crisis => "crisis",
            ResourceCategory::Coping => "coping",
        };
        let note = if urgent { ", urgent" } else { "" };
        println!(
            "{}",
            format!("   opening resources (category: {}{})", filter, note).green()
        );
    }
}

/// Print header
fn print_header() {
    println!("{}", "========================================".bold());
    println!("{}", format!("  MindTriage v{} - Chat Session", VERSION).bold());
    println!("{}", "========================================".bold());
    println!();
}

/// Format the prompt with the current severity badge
fn format_prompt(session: &ConversationSession<'_>) -> String {
    let link = if session.is_online() { "online" } else { "OFFLINE" };
    match session.current_severity() {
        Some(severity) => format!(
            "[{} | {}] > ",
            severity_badge(severity),
            link
        ),
        None => format!("[{}] > ", link),
    }
}

/// Severity name colored for the terminal
fn severity_badge(severity: Severity) -> String {
    let name = severity.to_string();
    match severity {
        Severity::Low => name.green().to_string(),
        Severity::Medium => name.yellow().to_string(),
        Severity::High => name.red().to_string(),
        Severity::Crisis => name.red().bold().to_string(),
    }
}

/// Print an assistant reply with its triage annotations
fn print_reply(reply: &Message, verbose: bool) {
    if let Some(severity) = reply.severity {
        let confidence = reply.confidence.unwrap_or_default();
        println!(
            "{} {}",
            severity_badge(severity),
            format!("({}, {:.0}% confidence)", severity.label(), confidence * 100.0).dimmed()
        );
        if severity == Severity::Crisis {
            println!("{}", "  CRISIS DETECTED - immediate help available".red().bold());
        }
    }

    if verbose {
        if let Some(triggers) = reply.triggers.as_ref().filter(|t| !t.is_empty()) {
            println!("{}", format!("  triggers: {}", triggers.join(", ")).dimmed());
        }
        if let Some(factors) = reply.risk_factors.as_ref().filter(|f| !f.is_empty()) {
            let codes: Vec<&str> = factors.iter().map(|f| f.code()).collect();
            println!("{}", format!("  risk factors: {}", codes.join(", ")).dimmed());
        }
    }

    println!("{}", reply.text.cyan());
    if let Some(actions) = &reply.actions {
        print_actions(actions, &reply.language);
    }
    println!();
}

/// Print recommended actions
fn print_actions(actions: &[Action], language: &str) {
    for action in actions {
        if action.urgent {
            println!("{}", format!("  [!] {}", action.label).red().bold());
        } else {
            println!("  [ ] {}", action.label);
        }
        if action.kind == ActionKind::Emergency {
            println!(
                "{}",
                format!("      helpline: {}", emergency_line(language)).dimmed()
            );
        }
    }
}

/// Print a risk analysis (single mode)
fn print_analysis(analysis: &RiskAnalysis, verbose: bool) {
    println!(
        "{} {} | sentiment={} | confidence={:.2}",
        severity_badge(analysis.severity),
        format!("({})", analysis.severity.label()).dimmed(),
        analysis.sentiment,
        analysis.confidence
    );
    if verbose || !analysis.triggers.is_empty() {
        if !analysis.triggers.is_empty() {
            println!("  triggers: {}", analysis.triggers.join(", "));
        }
        if !analysis.risk_factors.is_empty() {
            let codes: Vec<&str> = analysis.risk_factors.iter().map(|f| f.code()).collect();
            println!("  risk factors: {}", codes.join(", "));
        }
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("{}", "MindTriage API Server".bold());
    println!("Version: {}", VERSION);
    println!();

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
