// libslix-rs/libslix/src/listener/session.rs

//! Per-session listener state: random challenge and verified passwords.

use crate::constants::PASSWORD_LEN;
use crate::types::PasswordKind;

/// Per-session listener state. Never persisted and never part of
/// `SlixData` equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Challenge handed out by the last Get Random Number
    pub random_challenge: u16,
    /// Passwords verified so far, in storage order
    pub password_verified: [bool; PasswordKind::COUNT],
}

impl SessionState {
    /// Fresh session, nothing verified.
    pub fn new(random_challenge: u16) -> Self {
        Self {
            random_challenge,
            password_verified: [false; PasswordKind::COUNT],
        }
    }

    /// XOR mask applied to passwords sent with Set Password: the challenge
    /// (MSB first) repeated twice.
    pub fn password_mask(&self) -> [u8; PASSWORD_LEN] {
        let [hi, lo] = self.random_challenge.to_be_bytes();
        [hi, lo, hi, lo]
    }

    /// Recover a clear-text password from its masked form.
    pub fn unmask(&self, masked: &[u8; PASSWORD_LEN]) -> [u8; PASSWORD_LEN] {
        let mask = self.password_mask();
        std::array::from_fn(|i| masked[i] ^ mask[i])
    }

    /// Whether `kind` was verified in this session.
    pub fn is_verified(&self, kind: PasswordKind) -> bool {
        self.password_verified[kind.index()]
    }

    /// Record the outcome of a verification.
    pub fn set_verified(&mut self, kind: PasswordKind, verified: bool) {
        self.password_verified[kind.index()] = verified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_repeats_challenge() {
        let s = SessionState::new(0x1234);
        assert_eq!(s.password_mask(), [0x12, 0x34, 0x12, 0x34]);
        assert_eq!(s.unmask(&[0x12, 0x34, 0x12, 0x34]), [0; 4]);
        assert_eq!(s.unmask(&s.unmask(&[1, 2, 3, 4])), [1, 2, 3, 4]);
    }

    #[test]
    fn verification_flags() {
        let mut s = SessionState::default();
        assert!(!s.is_verified(PasswordKind::Privacy));
        s.set_verified(PasswordKind::Privacy, true);
        assert!(s.is_verified(PasswordKind::Privacy));
        assert!(!s.is_verified(PasswordKind::Read));
    }
}
