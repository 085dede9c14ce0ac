/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
}

///Ring signature errors
///
///Note that an invalid (forged, tampered) signature is *not* an error:
///`verify` reports it as `Ok(false)`.
///These errors only describe structurally unusable input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    ///The signer index does not point into the ring.
    #[error("Signer index {index} is out of bounds for a ring of size {ring_size}.")]
    InvalidSigner { index: usize, ring_size: usize },
    ///The private key does not belong to the claimed ring slot,
    ///or its private exponent does not invert the public one.
    #[error("The private key does not match the ring member at the signer index.")]
    KeyMismatch,
    ///The signature has the wrong number of values,
    ///or a value lies outside of `[0, 2^key_size)`.
    #[error("Malformed signature or parameters.")]
    Malformed,
    ///The ring has no members.
    #[error("The ring is empty.")]
    EmptyRing,
    ///A ring member's modulus or exponent is unusable,
    ///or its modulus is wider than the ring's key size.
    #[error("Invalid ring member key.")]
    InvalidKey,
    ///The key size is smaller than the combining function's output,
    ///or larger than `MAX_KEY_SIZE`.
    #[error("Key size of {0} bits is not supported.")]
    InvalidKeySize(usize),
}
