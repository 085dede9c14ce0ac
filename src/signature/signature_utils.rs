/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///Indices of every member except the signer, starting right after the signer and wrapping around.
pub(crate) fn traversal_order(signer_index: usize, ring_size: usize) -> impl Iterator<Item = usize> {
    return ((signer_index + 1)..ring_size).chain(0..signer_index);
}

///Check that `key` belongs to slot `signer_index` of the ring and that its exponents are inverses.
pub(crate) fn check_signer(ring: &Ring, signer_index: usize, key: &PrivateKey) -> Result<(), SignatureError> {
    let member = match ring.members().get(signer_index) {
        Some(member) => member,
        None => return Err(SignatureError::InvalidSigner{
            index: signer_index, ring_size: ring.len()
        })
    };
    if member.modulus != key.modulus || member.public_exponent != key.public_exponent {
        return Err(SignatureError::KeyMismatch);
    }

    //(2^e)^d == 2 (mod n)
    let probe = BigUint::from(2u8);
    let round_trip = probe
        .modpow(&key.public_exponent, &key.modulus)
        .modpow(&key.private_exponent, &key.modulus);
    if round_trip != probe {
        return Err(SignatureError::KeyMismatch);
    }
    return Ok(());
}

///Apply every member's public trapdoor to its signature value: `e[i] = g_i(s[i])`.
///
///Each output only depends on its own member,
///so with the `parallel` feature they are computed concurrently.
pub(crate) fn trapdoor_outputs(ring: &Ring, s: &[BigUint]) -> Vec<BigUint> {
    let key_size = ring.key_size();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        return ring.members().par_iter().zip(s.par_iter())
            .map(|(member, x)| forward(member, x, key_size))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    return ring.members().iter().zip(s.iter())
        .map(|(member, x)| forward(member, x, key_size))
        .collect();
}

///Count the values which land in their member's identity region.
pub(crate) fn identity_hits(ring: &Ring, s: &[BigUint]) -> usize {
    return ring.members().iter().zip(s.iter())
        .filter(|(member, x)| is_identity_region(x, &member.modulus, ring.key_size()))
        .count();
}
