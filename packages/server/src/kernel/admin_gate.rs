//! Admin unlock gate.
//!
//! A fixed passphrase compared in memory, with a timed lockout: three
//! consecutive failures from the same client block further attempts for
//! 30 seconds, correct password or not. A success before lockout resets the
//! counter. This is a UI gate, not an authentication system.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

const MAX_ATTEMPTS: u32 = 3;
const BLOCK_DURATION: Duration = Duration::from_secs(30);

/// Outcome of an unlock attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    /// Wrong password; carries attempts used so far out of the maximum.
    Rejected { attempts: u32, max_attempts: u32 },
    /// Locked out; carries the remaining block time in whole seconds.
    Blocked { retry_after_secs: u64 },
}

#[derive(Debug)]
struct ClientRecord {
    failures: u32,
    blocked_until: Option<Instant>,
}

pub struct AdminGate {
    password: String,
    clients: Mutex<HashMap<String, ClientRecord>>,
}

impl AdminGate {
    pub fn new(password: String) -> Self {
        Self {
            password,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Attempt to unlock admin mode for the given client key (usually an IP).
    pub fn attempt(&self, client: &str, password: &str) -> UnlockOutcome {
        self.attempt_at(client, password, Instant::now())
    }

    // Time-injected variant so tests can cross the lockout boundary without
    // sleeping.
    fn attempt_at(&self, client: &str, password: &str, now: Instant) -> UnlockOutcome {
        let mut clients = self.clients.lock().expect("admin gate lock poisoned");
        let record = clients.entry(client.to_string()).or_insert(ClientRecord {
            failures: 0,
            blocked_until: None,
        });

        if let Some(until) = record.blocked_until {
            if now < until {
                let remaining = until - now;
                return UnlockOutcome::Blocked {
                    retry_after_secs: remaining.as_secs().max(1),
                };
            }
            // Block expired: start fresh.
            record.failures = 0;
            record.blocked_until = None;
        }

        if password == self.password {
            record.failures = 0;
            return UnlockOutcome::Unlocked;
        }

        record.failures += 1;
        if record.failures >= MAX_ATTEMPTS {
            record.blocked_until = Some(now + BLOCK_DURATION);
            return UnlockOutcome::Blocked {
                retry_after_secs: BLOCK_DURATION.as_secs(),
            };
        }

        UnlockOutcome::Rejected {
            attempts: record.failures,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
