/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!RSA ring signatures
//!
//!Given a ring of RSA public keys and the private key of one of them,
//!create a signature which proves that one of the ring's members signed,
//!without revealing which one.

mod ring_signature;
mod signature_utils;

pub use ring_signature::RingSignature;

use crate::internal_common::*;

///Sign `msg` as member `signer_index` of `ring`.
///
///Shorthand for `RingSignature::sign`.
pub fn sign(
    msg: &[u8], ring: &Ring, signer_index: usize, key: &PrivateKey
) -> Result<RingSignature, SignatureError> {
    return RingSignature::sign(ring, signer_index, key, msg)
}

///Check `signature` on `msg` against `ring`.
///
///Shorthand for `RingSignature::verify`.
pub fn verify(
    msg: &[u8], ring: &Ring, signature: &RingSignature
) -> Result<bool, SignatureError> {
    return signature.verify(ring, msg)
}
