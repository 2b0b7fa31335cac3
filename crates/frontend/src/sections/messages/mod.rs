use leptos::prelude::*;

use crate::shared::toast::ToastService;

#[derive(Clone, PartialEq, Eq)]
struct Message {
    id: u32,
    sender: String,
    subject: String,
    preview: String,
    received: String,
    unread: bool,
}

fn seed_messages() -> Vec<Message> {
    [
        (1, "Ahmed Hassan", "Question about visa processing", "Could you confirm how long the visa usually takes...", "2 hours ago", true),
        (2, "Sarah Smith", "Wheelchair accessibility", "My mother will be travelling with us and needs...", "5 hours ago", true),
        (3, "Fatima Khan", "Payment confirmation", "I transferred the remaining balance yesterday...", "Yesterday", false),
        (4, "Omar Abdullah", "Group booking enquiry", "We are a group of twelve looking at the Ramadan...", "2 days ago", false),
    ]
    .into_iter()
    .map(|(id, sender, subject, preview, received, unread)| Message {
        id,
        sender: sender.to_string(),
        subject: subject.to_string(),
        preview: preview.to_string(),
        received: received.to_string(),
        unread,
    })
    .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn MessagesSection() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");
    let messages = RwSignal::new(seed_messages());

    let open_message = move |id: u32| {
        messages.update(|msgs| {
            if let Some(msg) = msgs.iter_mut().find(|m| m.id == id) {
                msg.unread = false;
            }
        });
        toast.info("Opening message...");
    };

    view! {
        <div class="content messages-section">
            {move || messages.get().into_iter().map(|message| {
                let id = message.id;
                view! {
                    <div class="message-card glass-card" class:message-card--unread={message.unread}>
                        <div class="message-card__meta">
                            <span class="message-card__sender">{message.sender.clone()}</span>
                            <span class="message-card__time">{message.received.clone()}</span>
                        </div>
                        <h4>{message.subject.clone()}</h4>
                        <p>{message.preview.clone()}</p>
                        <button class="button button--secondary" on:click=move |_| open_message(id)>
                            "View"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
