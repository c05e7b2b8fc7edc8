use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    provider::test::{RecordingNotifier, SentMessage},
    service::auth::AuthService,
};

mod verify_login;

/// Pulls the six-digit code out of the last login email sent to `to`.
fn sent_code(notifier: &RecordingNotifier, to: &str) -> String {
    let emails = notifier.emails_to(to);
    let Some(SentMessage::Email { body, .. }) = emails.last() else {
        panic!("no login email sent to {}", to);
    };

    body.split(|c: char| !c.is_ascii_digit())
        .find(|part| part.len() == 6)
        .expect("login email contains a code")
        .to_string()
}
