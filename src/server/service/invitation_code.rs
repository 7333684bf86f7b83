//! Random invitation codes for reservations.

use rand::Rng;

/// Uppercase letters and digits without the easily confused `0`, `O`, `1` and `I`.
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const CODE_LENGTH: usize = 8;

/// Draws a new invitation code. Uniqueness is enforced by the database, callers
/// check for an existing reservation with the code before using it.
pub fn generate_invitation_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
