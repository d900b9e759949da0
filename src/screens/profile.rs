//! Profile Screen
//!
//! Activity rating and friend-invite creation. Rating fields are
//! displayed exactly as the server reports them; the score is never
//! recomputed locally.

use crate::client::MessagingApi;
use crate::screens::{LoadPhase, Session};
use crate::shared::messaging::UserRating;

/// State behind the profile screen.
#[derive(Debug)]
pub struct ProfileScreen {
    session: Session,

    /// Server-computed activity aggregate
    pub rating: Option<UserRating>,
    pub rating_phase: LoadPhase,

    /// Last invite code returned by the server, revealed in the UI
    pub invite_code: Option<String>,
    /// Whether an invite request is in flight
    pub creating_invite: bool,

    pub ui_error: Option<String>,
}

impl ProfileScreen {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            rating: None,
            rating_phase: LoadPhase::Idle,
            invite_code: None,
            creating_invite: false,
            ui_error: None,
        }
    }

    /// One-shot load on screen entry.
    pub async fn activate(&mut self, api: &MessagingApi) {
        if self.rating_phase == LoadPhase::Idle {
            self.refresh_rating(api).await;
        }
    }

    /// Replace the rating with the server's aggregate.
    pub async fn refresh_rating(&mut self, api: &MessagingApi) {
        self.rating_phase = LoadPhase::Loading;
        match api.get_user_rating(self.session.user_id).await {
            Ok(rating) => {
                self.rating = Some(rating);
                self.rating_phase = LoadPhase::Ready;
                self.ui_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load user rating");
                self.rating_phase = LoadPhase::Failed;
                self.ui_error = Some(format!("Failed to load rating: {}", e));
            }
        }
    }

    /// Request a new invite code and reveal it.
    pub async fn create_invite(&mut self, api: &MessagingApi) {
        self.creating_invite = true;
        let result = api.create_invite(self.session.user_id).await;
        self.creating_invite = false;

        match result {
            Ok(code) => {
                self.invite_code = Some(code);
                self.ui_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create invite");
                self.ui_error = Some(format!("Failed to create invite: {}", e));
            }
        }
    }

    /// Hide the revealed invite code again.
    pub fn dismiss_invite(&mut self) {
        self.invite_code = None;
    }
}
