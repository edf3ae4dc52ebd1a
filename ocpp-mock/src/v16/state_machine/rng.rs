use std::{fmt::Write, ops::RangeInclusive};

use rand::{Rng, RngCore};

pub(crate) const TRANSACTION_ID_RANGE: RangeInclusive<i32> = 10000..=99999;

/// Random version 4 UUID, used as the unique id of outgoing calls.
pub(crate) fn get_uuid<R: RngCore>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    let mut s = String::with_capacity(36);
    for (i, b) in bytes.iter().enumerate() {
        if i == 4 || i == 6 || i == 8 || i == 10 {
            s.push('-');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}

pub(crate) fn get_transaction_id<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(TRANSACTION_ID_RANGE)
}
