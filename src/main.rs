use clap::Parser;
use log::info;

use whatsup_messaging::controller::ConversationController;
use whatsup_messaging::render::Alignment;
use whatsup_messaging::seed;
use whatsup_messaging::store::ConversationStore;

// Walks the conversation controller through a typical session: the inbox,
// opening a thread, drafting a reply, the details overlay, and back out.
//
// Usage:
//   cargo run                          # Walkthrough with log output
//   cargo run -- --open conv-jordan    # Start from a specific conversation
//   cargo run -- --json                # Emit the surfaces as one JSON document

#[derive(Parser)]
#[command(name = "whatsup-messaging")]
#[command(about = "Conversation view controller walkthrough")]
struct Cli {
    /// Conversation to open after showing the inbox
    #[arg(short, long)]
    open: Option<String>,

    /// Emit every rendered surface as one JSON document instead of logs
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<(), serde_json::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{:<5}] [{}] - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    let store = ConversationStore::from_seed(seed::conversations())
        .expect("seed conversations are valid");
    let mut controller = ConversationController::new(store);

    let inbox = controller.renderable_inbox();
    if !cli.json {
        info!("=== Inbox ({} conversations) ===", inbox.len());
        for row in &inbox {
            let dot = if row.unread_dot { "●" } else { " " };
            let subtitle = if row.subtitle.is_empty() {
                String::new()
            } else {
                format!(" ({})", row.subtitle)
            };
            info!(
                "{dot} [{}] {}{subtitle}: {} · {}",
                row.initials, row.name, row.last_message_preview, row.last_activity_time
            );
        }
    }

    let open_id = cli
        .open
        .or_else(|| inbox.first().map(|row| row.id.clone()))
        .expect("seed is never empty");
    if !controller.open_conversation(open_id.as_str()) {
        info!("could not open '{open_id}', staying in the inbox");
        return Ok(());
    }
    controller.set_draft_text("On my way!");

    let chat = controller
        .renderable_chat()
        .expect("a conversation is open");
    if !cli.json {
        info!("=== Chat: {} ({}) ===", chat.header.title, chat.header.subtitle);
        if let Some(plan) = &chat.plan_banner {
            info!("📌 {} · {}", plan.title, plan.subtitle);
        }
        if chat.show_empty_state {
            info!("(no messages yet)");
        }
        for message in &chat.messages {
            let align = match message.alignment {
                Alignment::End => ">>",
                Alignment::Start => "<<",
            };
            let label = if message.show_sender_label {
                format!("{}: ", message.sender_name.as_deref().unwrap_or("?"))
            } else {
                String::new()
            };
            info!("{align} {label}{}", message.text);
            if message.show_timestamp {
                info!("     {}", message.time);
            }
        }
        info!(
            "composer: '{}' (send {})",
            chat.composer.draft_text,
            if chat.composer.send_enabled { "enabled" } else { "disabled" }
        );
    }

    controller.open_details();
    let details = controller
        .renderable_details()
        .expect("details follow an open conversation");
    if !cli.json {
        info!("=== Details: {} ===", details.title);
        for member in &details.members {
            let you = if member.is_self { " (you)" } else { "" };
            info!("[{}] {}{you}", member.initials, member.name);
        }
    }

    // Back from details collapses straight to the inbox; the extra
    // go_back has nowhere to go and is ignored.
    controller.go_back();
    let ignored = controller.go_back();

    if cli.json {
        let document = serde_json::json!({
            "inbox": inbox,
            "chat": chat,
            "details": details,
            "final_state": controller.view_state(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        info!(
            "back in {:?} view (extra go_back accepted: {ignored})",
            controller.view_state().mode
        );
    }

    Ok(())
}
