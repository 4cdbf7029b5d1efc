//! Terminal front end for the cybersecurity assistant.
//!
//! Reads one line at a time from stdin and prints the engine's reply.
//! Type `/quit` (or send EOF) to exit, `/about` for a short description and
//! `/log` for the recent activity log.

use std::io::{self, BufRead, Write};

use cyber_assistant::{
    config::{load_config, LOG_PAGE_LEN},
    dialogue::DialogueEngine,
};

const ABOUT: &str = "CyberSecurity Chatbot helps you learn and stay aware of online safety tips!\n\nDeveloped for Part 3 POE";

fn main() {
    // Initialise structured logging, default level WARN.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Please check your .env file and CYBERBOT_* variables.");
            std::process::exit(1);
        }
    };

    let mut engine = match DialogueEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Initialisation error: {}", e);
            std::process::exit(1);
        }
    };
    let mut user_name = config.user_name.clone();

    println!("🤖 Hello! I'm your Cybersecurity Assistant.");
    println!("💬 Ask about passwords, phishing, VPNs... or try 'start quiz' and 'add task - <title>'.");
    println!("   (/about, /log, /quit)\n");

    let stdin = io::stdin();
    loop {
        print!("{}: ", user_name);
        io::stdout().flush().unwrap_or_default();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = line.trim();
                match input {
                    "" => continue,
                    "/quit" | "/exit" => break,
                    "/about" => println!("{}\n", ABOUT),
                    "/log" => {
                        let entries = engine.read_log(0, LOG_PAGE_LEN);
                        if entries.is_empty() {
                            println!("(activity log is empty)\n");
                        }
                        for entry in entries {
                            println!("  {}", entry);
                        }
                    }
                    _ => {
                        let reply = engine.handle_turn(input, &mut user_name);
                        println!("CyberBot: {}\n", reply);
                    }
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }

    println!("\n👋 Goodbye!");
}
