/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::tobytes::*;
use crate::errors::SignatureError;
use crate::hashes::DIGEST_BITS;
use crate::integer::*;

///The key size used when none is specified by the key provider.
pub const DEFAULT_KEY_SIZE: usize = 1024;
///The widest key size a ring may use.
pub const MAX_KEY_SIZE: usize = 16384;

///A public RSA key `(n, e)` which occupies one slot of a ring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RingMember {
    pub modulus: BigUint,
    pub public_exponent: BigUint

} impl RingMember {
    ///Given a modulus `n` and a public exponent `e`, return a RingMember
    pub fn new(modulus: BigUint, public_exponent: BigUint) -> Self {
        return Self{modulus, public_exponent}
    }

    ///Check that this key is usable within a ring of `key_size` bits.
    pub fn validate(&self, key_size: usize) -> Result<(), SignatureError> {
        if self.modulus < BigUint::from(3u8)
            || self.public_exponent.is_zero()
            || !fits_in_bits(&self.modulus, key_size)
        {
            return Err(SignatureError::InvalidKey);
        }
        return Ok(())
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingMember {}

///The private RSA key `(n, e, d)` of one ring member.
///
///Only the signer needs this;
///everyone else only needs the public `RingMember`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub modulus: BigUint,
    pub public_exponent: BigUint,
    pub private_exponent: BigUint

} impl PrivateKey {
    ///Create a PrivateKey instance given a modulus, a public exponent, and a private exponent
    pub fn new(modulus: BigUint, public_exponent: BigUint, private_exponent: BigUint) -> Self {
        return Self{modulus, public_exponent, private_exponent}
    }

    ///Turn this (private) key into a (public) RingMember
    pub fn to_member(&self) -> RingMember {
        return RingMember::new(self.modulus.clone(), self.public_exponent.clone())
    }

} impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_struct("PrivateKey")
            .field("modulus", &self.modulus)
            .field("public_exponent", &self.public_exponent)
            .finish_non_exhaustive()
    }
}

///A Ring is the ordered list of public keys a signer hides among.
///
///Order matters: it defines the cyclic traversal of signing and verification,
///so a signature only verifies against a ring in the **exact** same order.
///
///Every member's modulus must fit in `key_size` bits.
///Smaller moduli are fine, their trapdoors are extended to the full width.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ring {
    key_size: usize,
    members: Vec<RingMember>

} impl Ring {
    ///Creates a new, empty ring whose values are `key_size` bits wide.
    pub fn new(key_size: usize) -> Result<Self, SignatureError> {
        if key_size < DIGEST_BITS || key_size > MAX_KEY_SIZE {
            return Err(SignatureError::InvalidKeySize(key_size));
        }
        return Ok(Self{key_size, members: Vec::new()});
    }

    ///Creates a ring from existing members, checking every one of them.
    pub fn from_members(key_size: usize, members: Vec<RingMember>) -> Result<Self, SignatureError> {
        let mut ring = Self::new(key_size)?;
        for member in members {
            ring.push(member)?;
        }
        return Ok(ring);
    }

    ///Appends a member to the ring.
    pub fn push(&mut self, member: RingMember) -> Result<(), SignatureError> {
        member.validate(self.key_size)?;
        self.members.push(member);
        return Ok(());
    }

    ///Inserts a member at position `index` within the ring, shifting all members after it to the right.
    ///
    ///Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, member: RingMember) -> Result<(), SignatureError> {
        member.validate(self.key_size)?;
        self.members.insert(index, member);
        return Ok(());
    }

    pub fn key_size(&self) -> usize {
        return self.key_size;
    }

    pub fn members(&self) -> &[RingMember] {
        return &self.members;
    }

    pub fn len(&self) -> usize {
        return self.members.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.members.is_empty();
    }

    ///Return the position of `member` in the ring, if it is present.
    pub fn position(&self, member: &RingMember) -> Option<usize> {
        return self.members.iter().position(|m| m == member);
    }

    ///Check the whole ring.
    ///
    ///Rings built with `new`/`push` are always valid,
    ///but deserialized rings have not been checked yet.
    pub fn validate(&self) -> Result<(), SignatureError> {
        if self.key_size < DIGEST_BITS || self.key_size > MAX_KEY_SIZE {
            return Err(SignatureError::InvalidKeySize(self.key_size));
        }
        if self.members.is_empty() {
            return Err(SignatureError::EmptyRing);
        }
        for member in &self.members {
            member.validate(self.key_size)?;
        }
        return Ok(());
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Ring {}
