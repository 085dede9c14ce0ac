/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The message-keyed combining function which chains ring members together.

use crate::hashes::*;
use crate::integer::BigUint;

///A constant derived from the message which keys the combining function.
///
///Signer and verifier each derive it themselves; it is never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationParameter([u8; 32]);

impl PermutationParameter {
    ///Derive the permutation parameter of `msg`.
    pub fn from_message(msg: &[u8]) -> Self {
        return Self(domain_h_bytes(msg, domains::PERMUTATION_PARAMETER));
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0;
    }
}

///Mix `x` into a new `DIGEST_BITS`-wide value, keyed by `parameter`.
///
///`E_k(x) = H(x || k)`, where `x` is encoded big-endian.
///The parameter has a fixed width, so the concatenation is unambiguous.
pub fn combine(x: &BigUint, parameter: &PermutationParameter) -> BigUint {
    return domain_h_integer(
        &[x.to_bytes_be().as_slice(), parameter.as_bytes().as_slice()].concat(),
        domains::COMBINING
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_is_deterministic() {
        let k = PermutationParameter::from_message(b"Hello");
        let x = BigUint::from(123456789u64);
        assert_eq!(combine(&x, &k), combine(&x, &k));
        assert!(combine(&x, &k).bits() <= DIGEST_BITS as u64);
    }

    #[test]
    fn messages_key_unrelated_chains() {
        let k1 = PermutationParameter::from_message(b"Hello");
        let k2 = PermutationParameter::from_message(b"Hello2");
        assert_ne!(k1, k2);

        let x = BigUint::from(42u8);
        assert_ne!(combine(&x, &k1), combine(&x, &k2));
        assert_ne!(combine(&x, &k1), combine(&(x.clone() + 1u8), &k1));
    }
}
