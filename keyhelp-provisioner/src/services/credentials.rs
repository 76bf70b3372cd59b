//! Username and password generation for new panel accounts

use rand::Rng;
use rand::seq::SliceRandom;

/// Length of generated passwords.
pub const PASSWORD_LENGTH: usize = 16;

const USERNAME_BASE_LEN: usize = 8;
const USERNAME_TOKEN_LEN: usize = 4;
const USERNAME_FALLBACK: &str = "user";

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*-_=+";

/// Deterministic username for a service.
///
/// The email's local part is lowercased, stripped to `[a-z0-9]` and cut to
/// 8 characters (`"user"` if nothing is left), then suffixed with the last
/// four decimal digits of `service_id`. Result is at most 12 characters.
pub fn generate_username(email: &str, service_id: u64) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut base: String = local
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(USERNAME_BASE_LEN)
        .collect();
    if base.is_empty() {
        base.push_str(USERNAME_FALLBACK);
    }

    let id = service_id.to_string();
    base.push_str(&id[id.len().saturating_sub(USERNAME_TOKEN_LEN)..]);
    base
}

/// Random 16-character password with at least one lowercase letter,
/// uppercase letter, digit and symbol.
pub fn generate_password() -> String {
    let mut rng = rand::rng();
    let classes = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
    let all: Vec<u8> = classes.concat();

    let mut chars: Vec<u8> = classes
        .iter()
        .map(|class| class[rng.random_range(0..class.len())])
        .collect();
    while chars.len() < PASSWORD_LENGTH {
        chars.push(all[rng.random_range(0..all.len())]);
    }
    chars.shuffle(&mut rng);

    chars.into_iter().map(char::from).collect()
}
