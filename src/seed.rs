//! Fixed conversation seed for development and preview.
//!
//! The store is loaded from this set at startup and never repopulated.
//! Content mirrors the city-discovery flavor of the rest of the app.

use wucore::model::{Conversation, Message, Participant, Plan};

/// Participant id of the local user in every seeded conversation.
pub const SELF_ID: &str = "me";

/// Display name of the local user.
pub const SELF_NAME: &str = "Alex Thompson";

fn me() -> Participant {
    Participant::local(SELF_ID, SELF_NAME)
}

/// The conversation set the store is seeded with.
pub fn conversations() -> Vec<Conversation> {
    vec![sarah(), weekend_crew(), jordan(), brunch_collective(), maya()]
}

fn sarah() -> Conversation {
    Conversation::new(
        "conv-sarah",
        "Sarah Chen",
        vec![me(), Participant::new("sarah", "Sarah Chen")],
    )
    .with_preview("See you at 8 then! 🎉", "2m ago")
    .with_unread()
    .with_messages(vec![
        Message::new(
            "sarah-1",
            "sarah",
            "Hey! Did you check out that pasta place I sent you?",
            "7:42 PM",
        )
        .with_timestamp(),
        Message::new("sarah-2", SELF_ID, "The Golden Fork? Looks amazing", "7:45 PM"),
        Message::new("sarah-3", SELF_ID, "Want to try it this week?", "7:45 PM"),
        Message::new("sarah-4", "sarah", "Yes! Thursday works for me", "7:58 PM"),
        Message::new("sarah-5", "sarah", "See you at 8 then! 🎉", "8:02 PM").with_timestamp(),
    ])
}

fn weekend_crew() -> Conversation {
    Conversation::new(
        "conv-weekend-crew",
        "Weekend Crew",
        vec![
            me(),
            Participant::new("sarah", "Sarah Chen"),
            Participant::new("marcus", "Marcus Rivera"),
            Participant::new("priya", "Priya Shah"),
        ],
    )
    .as_group()
    .with_preview("Sarah: Same! Been meaning to go", "15m ago")
    .with_unread()
    .with_plan(Plan::new(
        "plan-jazz-night",
        "Jazz Night at Blue Note",
        "Sat · 8:00 PM · 131 W 3rd St",
    ))
    .with_messages(vec![
        Message::new(
            "crew-1",
            "marcus",
            "Jazz night at Blue Note this Saturday, who's in?",
            "6:10 PM",
        )
        .with_timestamp(),
        Message::new("crew-2", "marcus", "Tickets are $35", "6:10 PM"),
        Message::new("crew-3", "priya", "Count me in! 🎷", "6:24 PM"),
        Message::new("crew-4", SELF_ID, "I'm in too", "6:30 PM"),
        Message::new("crew-5", "sarah", "Same! Been meaning to go", "6:47 PM"),
    ])
}

fn jordan() -> Conversation {
    Conversation::new(
        "conv-jordan",
        "Jordan Lee",
        vec![me(), Participant::new("jordan", "Jordan Lee")],
    )
    .with_preview("That rooftop was unreal 🌇", "1h ago")
    .with_messages(vec![
        Message::new("jordan-1", SELF_ID, "Rooftop Sessions tonight?", "Yesterday")
            .with_timestamp(),
        Message::new("jordan-2", "jordan", "Obviously", "Yesterday"),
        Message::new("jordan-3", "jordan", "That rooftop was unreal 🌇", "9:12 PM")
            .with_timestamp(),
    ])
}

fn brunch_collective() -> Conversation {
    Conversation::new(
        "conv-brunch",
        "Brunch Collective",
        vec![
            me(),
            Participant::new("dana", "Dana Kim"),
            Participant::new("leo", "Leo Martinez"),
        ],
    )
    .as_group()
    .with_preview("Dana: Saturday 11am works", "3h ago")
    .with_messages(vec![
        Message::new("brunch-1", "dana", "New brunch spot in SoHo, anyone?", "10:02 AM")
            .with_timestamp(),
        Message::new("brunch-2", "leo", "I'm free Saturday", "10:15 AM"),
        Message::new("brunch-3", "dana", "Saturday 11am works", "10:18 AM"),
    ])
}

fn maya() -> Conversation {
    // Fresh connection, no messages yet. Exercises the chat empty state.
    Conversation::new(
        "conv-maya",
        "Maya Patel",
        vec![me(), Participant::new("maya", "Maya Patel")],
    )
    .with_preview("You're now connected", "Just now")
}
