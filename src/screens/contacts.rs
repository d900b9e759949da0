//! Contacts Screen
//!
//! Contact list plus a local search filter. The filter narrows what is
//! displayed; the cached list stays the server's verbatim.

use crate::client::MessagingApi;
use crate::screens::{LoadPhase, Session};
use crate::shared::messaging::Contact;

/// State behind the contact list.
#[derive(Debug)]
pub struct ContactsScreen {
    session: Session,

    /// Contact list, in server order
    pub contacts: Vec<Contact>,
    pub phase: LoadPhase,

    /// Search query for filtering the displayed list
    pub search_query: String,

    pub ui_error: Option<String>,
}

impl ContactsScreen {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            contacts: Vec::new(),
            phase: LoadPhase::Idle,
            search_query: String::new(),
            ui_error: None,
        }
    }

    /// One-shot load on screen entry.
    pub async fn activate(&mut self, api: &MessagingApi) {
        if self.phase == LoadPhase::Idle {
            self.refresh(api).await;
        }
    }

    /// Replace the contact list with the server's.
    pub async fn refresh(&mut self, api: &MessagingApi) {
        self.phase = LoadPhase::Loading;
        match api.get_contacts(self.session.user_id).await {
            Ok(contacts) => {
                self.contacts = contacts;
                self.phase = LoadPhase::Ready;
                self.ui_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load contacts");
                self.phase = LoadPhase::Failed;
                self.ui_error = Some(format!("Failed to load contacts: {}", e));
            }
        }
    }

    /// Contacts matching the search query, preserving server order.
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return self.contacts.iter().collect();
        }
        self.contacts
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(query.as_str())
                    || c.status.to_lowercase().contains(query.as_str())
            })
            .collect()
    }
}
