//! # Screen Flow
//!
//! The front door is a four-step machine driven by clicks:
//!
//! ```text
//! Start ──start()──▶ Select ──continue_as_guest()──▶ Guest
//!   │                   └──(Google redirect, leaves the app)
//!   └──resume_login(email)──▶ Login
//! ```
//!
//! `Guest` and `Login` both hand off to the chat screen.

use crate::url::get_query_param;

/// Credits of a Google sign-in, and the fallback when the balance is unknown.
pub const GOOGLE_CREDITS: u32 = 75;

/// Credits granted when entering guest mode.
pub const GUEST_CREDITS: u32 = 20;

/// Guest allowance advertised on the selection screen.
///
/// Does not match [`GUEST_CREDITS`]; which one is correct is an open product
/// question, so both are kept as they ship.
pub const GUEST_ADVERTISED_CREDITS: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Start,
    Select,
    Guest,
    Login,
}

/// Where the visitor is and what they carry into the chat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub step: Step,
    pub email: String,
    pub credits: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial session for a landing URL. `/?email=<email>` is where the OAuth
    /// backend sends a signed-in user back, which skips straight to `Login`.
    pub fn from_landing_query(query: &str) -> Self {
        let mut session = Self::new();
        if let Some(email) = get_query_param(query, "email").filter(|e| !e.is_empty()) {
            session.resume_login(email);
        }
        session
    }

    /// `Start → Select`. Returns whether the step changed.
    pub fn start(&mut self) -> bool {
        if self.step != Step::Start {
            return false;
        }
        self.step = Step::Select;
        true
    }

    /// `Select → Guest` with the guest allowance and no email.
    pub fn continue_as_guest(&mut self) -> bool {
        if self.step != Step::Select {
            return false;
        }
        self.step = Step::Guest;
        self.credits = GUEST_CREDITS;
        self.email.clear();
        true
    }

    /// `Start → Login` for a visitor returning from Google.
    pub fn resume_login(&mut self, email: String) -> bool {
        if self.step != Step::Start {
            return false;
        }
        self.step = Step::Login;
        self.email = email;
        self.credits = GOOGLE_CREDITS;
        true
    }

    /// Whether the chat screen takes over.
    pub fn in_chat(&self) -> bool {
        matches!(self.step, Step::Guest | Step::Login)
    }

    pub fn is_guest(&self) -> bool {
        self.step == Step::Guest
    }

    /// What the chat screen receives, once the session has reached it.
    pub fn handoff(&self) -> Option<Handoff> {
        self.in_chat().then(|| Handoff {
            email: self.email.clone(),
            credits: self.credits,
            guest: self.is_guest(),
        })
    }
}

/// Entry into the chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub email: String,
    pub credits: u32,
    pub guest: bool,
}

impl Handoff {
    /// Read `/menu?email=…&credits=…` as written by the auth callback. A missing
    /// or unparsable credit count falls back to [`GOOGLE_CREDITS`].
    pub fn from_menu_query(query: &str) -> Self {
        let email = get_query_param(query, "email").unwrap_or_default();
        let credits = get_query_param(query, "credits")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(GOOGLE_CREDITS);
        Self { email, credits, guest: false }
    }
}
