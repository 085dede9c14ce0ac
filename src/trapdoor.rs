/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The per-member RSA trapdoor permutation, extended to a common domain.
//!
//! Every member's permutation acts on `[0, 2^key_size)`, no matter how wide
//! its own modulus is. An input `x` is split as `x = q*n + r`;
//! the low part `r` is permuted with RSA and the high part `q` is kept.
//!
//! Inputs in the last, partial block (where `(q + 1)*n` would exceed
//! `2^key_size - 1`) are left unchanged: the permutation is the identity there.
//! This is how the classical construction behaves,
//! and signatures depend on it being reproduced exactly.

use num_integer::Integer;
use crate::integer::*;
use crate::types::{RingMember, PrivateKey};

///Extend `r -> r^exponent mod modulus` to all of `[0, 2^key_size)`.
pub fn extend(x: &BigUint, exponent: &BigUint, modulus: &BigUint, key_size: usize) -> BigUint {
    let (q, r) = x.div_rem(modulus);
    let full_block = (&q + 1u8) * modulus < domain_bound(key_size);
    return match full_block {
        true => q * modulus + r.modpow(exponent, modulus),
        false => x.clone()
    };
}

///Check whether `x` falls in the identity region of `modulus`'s extended permutation.
pub fn is_identity_region(x: &BigUint, modulus: &BigUint, key_size: usize) -> bool {
    let q = x / modulus;
    return (q + 1u8) * modulus >= domain_bound(key_size);
}

///The public direction `g(x)`, computable by anyone.
pub fn forward(member: &RingMember, x: &BigUint, key_size: usize) -> BigUint {
    return extend(x, &member.public_exponent, &member.modulus, key_size);
}

///The private direction `g^-1(y)`, only computable with the private exponent.
pub fn invert(key: &PrivateKey, y: &BigUint, key_size: usize) -> BigUint {
    return extend(y, &key.private_exponent, &key.modulus, key_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const KEY_SIZE: usize = 256;

    fn toy_key() -> PrivateKey {
        //61 * 53
        return PrivateKey::new(BigUint::from(3233u32), BigUint::from(17u32), BigUint::from(2753u32));
    }

    #[test]
    fn inverse_undoes_forward() {
        let key = toy_key();
        let member = key.to_member();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..256 {
            let x = random_integer_with_rng(&mut rng, KEY_SIZE);
            let y = forward(&member, &x, KEY_SIZE);
            assert!(fits_in_bits(&y, KEY_SIZE));
            assert_eq!(invert(&key, &y, KEY_SIZE), x);
            assert_eq!(forward(&member, &invert(&key, &x, KEY_SIZE), KEY_SIZE), x);
        }
    }

    #[test]
    fn forward_keeps_the_block() {
        let member = toy_key().to_member();
        let x = BigUint::from(5u32) * &member.modulus + 2u8;
        //2^17 mod 3233 = 1752
        assert_eq!(forward(&member, &x, KEY_SIZE), BigUint::from(5u32 * 3233 + 1752));
    }

    #[test]
    fn last_partial_block_is_identity() {
        let member = toy_key().to_member();
        let top = domain_bound(KEY_SIZE) - 1u8;
        assert!(is_identity_region(&top, &member.modulus, KEY_SIZE));
        assert_eq!(forward(&member, &top, KEY_SIZE), top);

        //the first value of the partial block
        let q = &top / &member.modulus;
        let start = q * &member.modulus;
        assert!(is_identity_region(&start, &member.modulus, KEY_SIZE));
        assert_eq!(forward(&member, &start, KEY_SIZE), start);

        //the last value of the final full block is still permuted
        let before = &start - 1u8;
        assert!(!is_identity_region(&before, &member.modulus, KEY_SIZE));
    }

    #[test]
    fn full_width_modulus_only_permutes_below_n() {
        //a modulus of exactly key_size bits leaves a single full block
        let key = toy_key();
        let member = key.to_member();
        let key_size = 12;
        let x = BigUint::from(2u32);
        let y = forward(&member, &x, key_size);
        assert_eq!(y, BigUint::from(1752u32));
        assert_eq!(invert(&key, &y, key_size), x);

        let x = BigUint::from(3233u32);
        assert_eq!(forward(&member, &x, key_size), x);
    }
}
