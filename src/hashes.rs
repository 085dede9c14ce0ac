/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha2::{
    Sha256,
    Digest
};
use crate::integer::BigUint;

///Output width of every hash in this crate, in bits.
pub const DIGEST_BITS: usize = 256;

///Hash bytes to bytes, domain separated.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    hasher.update(domain);
    return hasher.finalize().into();
}

///Hash bytes to a `DIGEST_BITS`-wide integer, domain separated.
pub fn domain_h_integer(msg: &[u8], domain: &[u8]) -> BigUint {
    return BigUint::from_bytes_be(&domain_h_bytes(msg, domain));
}

pub mod domains {
    //! Pre-defined hash domains

    pub const PERMUTATION_PARAMETER: &[u8] =    "rsa_ring_param".as_bytes();
    pub const COMBINING: &[u8] =                "rsa_ring_combine".as_bytes();
}
