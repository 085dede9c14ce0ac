/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Big integer helpers and random sampling

pub use num_bigint::BigUint;
pub use num_traits::{Zero, One};
use rand::{RngCore, CryptoRng};
use zeroize::Zeroize;

///Return `2^bits`, the exclusive upper bound of a `bits`-wide value.
pub fn domain_bound(bits: usize) -> BigUint {
    return BigUint::one() << bits;
}

///Check that `x` lies in `[0, 2^bits)`.
pub fn fits_in_bits(x: &BigUint, bits: usize) -> bool {
    return x.bits() <= bits as u64;
}

///Return a uniformly random integer in `[0, 2^bits)`, drawn from `rng`.
///
///The scratch buffer is wiped before returning.
pub fn random_integer_with_rng<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bits: usize) -> BigUint {
    let mut bytes = vec![0u8; (bits + 7) / 8];
    rng.fill_bytes(&mut bytes);

    //mask off the excess high bits of the first (most significant) byte
    let excess = bytes.len() * 8 - bits;
    if let Some(top) = bytes.first_mut() {
        *top &= 0xffu8 >> excess;
    }

    let value = BigUint::from_bytes_be(&bytes);
    bytes.zeroize();
    return value;
}
