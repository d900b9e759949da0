//! Admin Screen
//!
//! User management dashboard: the full user list, block/unblock, and the
//! stat cards. Mutations use reload-on-success: instead of patching the
//! local list, the authoritative list is re-fetched, so local and server
//! state cannot diverge.
//!
//! Blocking an admin is refused before any request is issued. That guard
//! is a UI courtesy, not authorization; the server enforces its own
//! rules.

use crate::client::MessagingApi;
use crate::screens::{LoadPhase, Session};
use crate::shared::messaging::{AdminStat, User};

/// State behind the admin dashboard.
#[derive(Debug)]
pub struct AdminScreen {
    session: Session,

    /// Every registered user, in server order
    pub users: Vec<User>,
    pub users_phase: LoadPhase,

    /// Stat cards; display data only, never sent to the server
    pub stats: Vec<AdminStat>,

    pub ui_error: Option<String>,
}

impl AdminScreen {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            users: Vec::new(),
            users_phase: LoadPhase::Idle,
            stats: default_stats(),
            ui_error: None,
        }
    }

    /// One-shot load on screen entry.
    pub async fn activate(&mut self, api: &MessagingApi) {
        if self.users_phase == LoadPhase::Idle {
            self.refresh_users(api).await;
        }
    }

    /// Replace the user list with the server's.
    pub async fn refresh_users(&mut self, api: &MessagingApi) {
        self.users_phase = LoadPhase::Loading;
        match api.get_all_users().await {
            Ok(users) => {
                self.users = users;
                self.users_phase = LoadPhase::Ready;
                self.ui_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load users");
                self.users_phase = LoadPhase::Failed;
                self.ui_error = Some(format!("Failed to load users: {}", e));
            }
        }
    }

    /// Block a user and reload the list. Refused without a request when
    /// the target is an admin.
    pub async fn block_user(&mut self, api: &MessagingApi, user_id: i64, reason: String) {
        if self.is_protected(user_id) {
            tracing::warn!(user_id, "refusing to block an admin user");
            self.ui_error = Some("Admin users cannot be blocked".to_string());
            return;
        }
        match api.block_user(user_id, self.session.user_id, reason).await {
            Ok(()) => {
                self.refresh_users(api).await;
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "failed to block user");
                self.ui_error = Some(format!("Failed to block user: {}", e));
            }
        }
    }

    /// Lift a block and reload the list. Idempotent: unblocking an
    /// already-unblocked user succeeds and changes nothing.
    pub async fn unblock_user(&mut self, api: &MessagingApi, user_id: i64) {
        match api.unblock_user(user_id).await {
            Ok(()) => {
                self.refresh_users(api).await;
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "failed to unblock user");
                self.ui_error = Some(format!("Failed to unblock user: {}", e));
            }
        }
    }

    /// Whether the block action must be disabled for this user.
    pub fn is_protected(&self, user_id: i64) -> bool {
        self.users
            .iter()
            .any(|u| u.id == user_id && u.is_admin)
    }
}

fn default_stats() -> Vec<AdminStat> {
    vec![
        AdminStat::new("Активных пользователей", "1,234", "Users", "+12%"),
        AdminStat::new("Сообщений за сегодня", "45.6K", "MessageSquare", "+8%"),
        AdminStat::new("Заблокировано угроз", "23", "Shield", "-15%"),
        AdminStat::new("Время отклика", "1.2s", "Zap", "-5%"),
    ]
}
