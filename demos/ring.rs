// SPDX short identifier: Unlicense

use rand::thread_rng;
use rsa::{
    RsaPrivateKey,
    traits::{PublicKeyParts, PrivateKeyParts}
};

use rsa_ring::{
    integer::BigUint,
    DEFAULT_KEY_SIZE,
    PrivateKey,
    Ring,
    signature::{sign, verify},
};

const RINGSIZE: usize = 4;
const SIGNER: usize = 1;

fn main() {
    //The ring's keys come from an external key provider.
    //For demonstration they are generated here with the `rsa` crate.
    let keys: Vec<PrivateKey> = (0..RINGSIZE).map(|_| {
        let key = RsaPrivateKey::new(&mut thread_rng(), DEFAULT_KEY_SIZE)
            .expect("Real software should have proper error handling.");
        PrivateKey::new(
            BigUint::from_bytes_be(&key.n().to_bytes_be()),
            BigUint::from_bytes_be(&key.e().to_bytes_be()),
            BigUint::from_bytes_be(&key.d().to_bytes_be()),
        )
    }).collect();

    //Everyone can build the ring from the public keys alone.
    //The order matters: verifiers must use the exact same order.
    let ring = Ring::from_members(
        DEFAULT_KEY_SIZE,
        keys.iter().map(|key| key.to_member()).collect()
    ).expect("Real software should have proper error handling.");

    //The signer finds its own slot from its public key.
    let signer_key = &keys[SIGNER];
    let signer_index = ring.position(&signer_key.to_member())
        .expect("The signer's key should be in the ring.");

    //Only the signer's private key is needed to sign.
    let signature = sign(b"Hello", &ring, signer_index, signer_key)
        .expect("Real software should have proper error handling.");
    println!("Actual signer index: {signer_index}");
    println!("Glue value: {}", signature.c);

    //The signature verifies, but doesn't reveal which member created it.
    assert!(verify(b"Hello", &ring, &signature).unwrap());

    //A different message doesn't.
    assert!(!verify(b"Hello2", &ring, &signature).unwrap());
    println!("Verified.");
}
