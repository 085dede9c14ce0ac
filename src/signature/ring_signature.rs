/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{thread_rng, RngCore, CryptoRng};

use crate::internal_common::*;
use super::signature_utils::*;

///An RSA ring signature.
///
///`c` is the glue value: folding every member's trapdoor output into it,
///in ring order, must lead back to `c`.
///`s[i]` is the value of ring member `i`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingSignature {
    pub c: BigUint,
    pub s: Vec<BigUint>

} impl RingSignature {
    ///Create a signature on `msg` given a ring, the index of the signer's slot, and the signer's private key.
    ///
    ///Randomness is drawn from the thread-local CSPRNG; see `sign_with_rng`.
    pub fn sign(
        ring: &Ring, signer_index: usize, key: &PrivateKey, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        return Self::sign_with_rng(ring, signer_index, key, msg, &mut thread_rng())
    }

    ///Same as `sign`, except all randomness is drawn from `rng`.
    ///
    ///The seed is drawn first, then one value per non-signer slot in traversal order,
    ///so a seeded `rng` reproduces the same signature.
    pub fn sign_with_rng<R: RngCore + CryptoRng + ?Sized>(
        ring: &Ring, signer_index: usize, key: &PrivateKey, msg: &[u8], rng: &mut R
    ) -> Result<Self, SignatureError> {
        ring.validate()?;
        check_signer(ring, signer_index, key)?;

        let n = ring.len();
        let key_size = ring.key_size();
        let members = ring.members();
        tracing::debug!(ring_size = n, key_size, "creating ring signature");

        let k = PermutationParameter::from_message(msg);
        let u = random_integer_with_rng(rng, key_size);
        let mut v = combine(&u, &k);
        //if the signer sits in the last slot, the ring closes at the seed
        let mut c = v.clone();

        let mut s: Vec<BigUint> = vec![BigUint::zero(); n];
        for i in traversal_order(signer_index, n) {
            s[i] = random_integer_with_rng(rng, key_size);
            let e_i = forward(&members[i], &s[i], key_size);
            v = combine(&(v ^ e_i), &k);
            if i == n - 1 { c = v.clone() }
        }

        //solve E(v ^ g(s_j)) = E(u) for s_j
        let target = v ^ &u;
        let s_j = invert(key, &target, key_size);

        //an exponent which only inverts e on part of Z_n would close the ring here and there
        if forward(&members[signer_index], &s_j, key_size) != target {
            return Err(SignatureError::KeyMismatch);
        }
        s[signer_index] = s_j;

        return Ok(Self{c, s})
    }

    ///Check the signature's shape against the ring without touching its cryptographic content.
    fn check_structure(&self, ring: &Ring) -> Result<(), SignatureError> {
        ring.validate()?;
        if self.s.len() != ring.len() {
            return Err(SignatureError::Malformed);
        }
        let key_size = ring.key_size();
        if !fits_in_bits(&self.c, key_size) || !self.s.iter().all(|x| fits_in_bits(x, key_size)) {
            return Err(SignatureError::Malformed);
        }
        return Ok(());
    }

    ///Given a ring and a message, check if this signature is valid.
    ///
    ///Returns `Ok(true)` if the ring closes, `Ok(false)` if it doesn't,
    ///or `Err(SignatureError)` if the signature or ring is malformed.
    ///Note that this will fail unless the ring is in the **exact** same order as when it was signed.
    pub fn verify(&self, ring: &Ring, msg: &[u8]) -> Result<bool, SignatureError> {
        self.check_structure(ring)?;
        tracing::debug!(ring_size = ring.len(), key_size = ring.key_size(), "verifying ring signature");
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(identity_hits = identity_hits(ring, &self.s), "trapdoor identity fallbacks");
        }

        let k = PermutationParameter::from_message(msg);
        let e = trapdoor_outputs(ring, &self.s);

        //travel around the ring
        let closure = e.iter()
            .fold(self.c.clone(), |acc, e_i| combine(&(acc ^ e_i), &k));

        //check if we end up back where we started
        let valid = closure == self.c;
        tracing::debug!(valid, "ring signature verified");
        return Ok(valid)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingSignature {}
