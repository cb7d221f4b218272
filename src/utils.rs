//! The SRP-6a derivation functions, parameterized by wire convention.
//!
//! Every function here is pure. Quantities whose hash composition differs
//! between the two conventions dispatch on [`SrpVariant`] to one small
//! function per convention, so each byte-exact contract stays independently
//! testable.

use digest::{Digest, Output};
use num_bigint::BigUint;

use crate::codec;
use crate::errors::SrpAuthError;
use crate::types::{SrpGroup, SrpVariant};

/// H(data)
#[must_use]
pub fn compute_hash<D: Digest>(data: &[u8]) -> Output<D> {
    D::digest(data)
}

// k = H(N | PAD(g))
pub fn compute_k<D: Digest>(group: &SrpGroup) -> Result<BigUint, SrpAuthError> {
    let g = codec::pad_left(&group.g.to_bytes_be(), group.byte_length())?;
    let mut d = D::new();
    d.update(group.n.to_bytes_be());
    d.update(g);
    Ok(BigUint::from_bytes_be(&d.finalize()))
}

/// Derive the private key `x` from the user's credentials.
#[must_use]
pub fn compute_x<D: Digest>(
    variant: SrpVariant,
    username: &str,
    password: &str,
    salt: &[u8],
    group: &SrpGroup,
) -> BigUint {
    match variant {
        SrpVariant::Standard => standard_x::<D>(password, salt, group),
        SrpVariant::HexString => hex_string_x::<D>(username, password, salt, group),
    }
}

// x = H(s | H(P)) % N
fn standard_x<D: Digest>(password: &str, salt: &[u8], group: &SrpGroup) -> BigUint {
    let inner = D::digest(password.as_bytes());
    let mut d = D::new();
    d.update(salt);
    d.update(inner);
    BigUint::from_bytes_be(&d.finalize()) % &group.n
}

// x = H(uppercase(hex(s) | strip0(hex(H(I ":" P))))) -> hex -> strip0 -> int % N
//
// The chain hashes hex *text*, strips leading zero digits (not bytes) of the
// inner digest, and upper-cases the concatenation before the outer hash.
// Deployed verifiers depend on each of these steps verbatim.
fn hex_string_x<D: Digest>(
    username: &str,
    password: &str,
    salt: &[u8],
    group: &SrpGroup,
) -> BigUint {
    let mut d = D::new();
    d.update(username.as_bytes());
    d.update(b":");
    d.update(password.as_bytes());
    let identity = hex::encode(d.finalize());

    let mut chain = hex::encode(salt);
    chain.push_str(codec::strip_leading_zero_digits(&identity));
    let outer = hex::encode(D::digest(chain.to_uppercase().as_bytes()));

    parse_hex_int(codec::strip_leading_zero_digits(&outer)) % &group.n
}

fn parse_hex_int(hex: &str) -> BigUint {
    if hex.is_empty() {
        return BigUint::default();
    }
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap_or_default()
}

/// Derive the scrambling parameter `u` from both public ephemerals.
pub fn compute_u<D: Digest>(
    variant: SrpVariant,
    group: &SrpGroup,
    a_pub: &BigUint,
    b_pub: &BigUint,
) -> Result<BigUint, SrpAuthError> {
    match variant {
        SrpVariant::Standard => standard_u::<D>(group, a_pub, b_pub),
        SrpVariant::HexString => Ok(hex_string_u::<D>(a_pub, b_pub)),
    }
}

// u = H(PAD(A) | PAD(B))
fn standard_u<D: Digest>(
    group: &SrpGroup,
    a_pub: &BigUint,
    b_pub: &BigUint,
) -> Result<BigUint, SrpAuthError> {
    let width = group.byte_length();
    let mut d = D::new();
    d.update(codec::pad_left(&a_pub.to_bytes_be(), width)?);
    d.update(codec::pad_left(&b_pub.to_bytes_be(), width)?);
    Ok(BigUint::from_bytes_be(&d.finalize()))
}

// u = H(hex(A) | hex(B)) over the unpadded lowercase hex text
fn hex_string_u<D: Digest>(a_pub: &BigUint, b_pub: &BigUint) -> BigUint {
    let mut d = D::new();
    d.update(a_pub.to_str_radix(16).as_bytes());
    d.update(b_pub.to_str_radix(16).as_bytes());
    BigUint::from_bytes_be(&d.finalize())
}

// v = g^x % N
#[must_use]
pub fn compute_v(group: &SrpGroup, x: &BigUint) -> BigUint {
    group.g.modpow(x, &group.n)
}

// S = ((B + N - (k * g^x % N)) % N) ^ (a + u * x) % N
//
// The `+ N` keeps the subtraction non-negative; the arithmetic type is
// unsigned.
#[must_use]
pub fn compute_premaster_secret(
    group: &SrpGroup,
    b_pub: &BigUint,
    k: &BigUint,
    x: &BigUint,
    a: &BigUint,
    u: &BigUint,
) -> BigUint {
    let kv = (k * compute_v(group, x)) % &group.n;
    let base = (b_pub + &group.n - kv) % &group.n;
    base.modpow(&(a + u * x), &group.n)
}

// K = H(S)
#[must_use]
pub fn compute_session_key<D: Digest>(premaster: &BigUint) -> Output<D> {
    compute_hash::<D>(&premaster.to_bytes_be())
}

/// Derive the client evidence `M1`.
#[must_use]
pub fn compute_m1<D: Digest>(
    variant: SrpVariant,
    group: &SrpGroup,
    username: &str,
    salt: &[u8],
    a_pub: &BigUint,
    b_pub: &BigUint,
    premaster: &BigUint,
    key: &[u8],
) -> Output<D> {
    match variant {
        SrpVariant::Standard => standard_m1::<D>(group, username, salt, a_pub, b_pub, key),
        SrpVariant::HexString => hex_string_m1::<D>(a_pub, b_pub, premaster),
    }
}

// M1 = H((H(N) XOR H(g)) | H(I) | s | A | B | K)
//
// H(g) hashes the unpadded generator bytes, unlike the padded form in `k`.
fn standard_m1<D: Digest>(
    group: &SrpGroup,
    username: &str,
    salt: &[u8],
    a_pub: &BigUint,
    b_pub: &BigUint,
    key: &[u8],
) -> Output<D> {
    let h_n = D::digest(group.n.to_bytes_be());
    let h_g = D::digest(group.g.to_bytes_be());
    let binding: Vec<u8> = h_n.iter().zip(h_g.iter()).map(|(n, g)| n ^ g).collect();

    let mut d = D::new();
    d.update(binding);
    d.update(D::digest(username.as_bytes()));
    d.update(salt);
    d.update(a_pub.to_bytes_be());
    d.update(b_pub.to_bytes_be());
    d.update(key);
    d.finalize()
}

// M1 = H(hex(A) | hex(B) | hex(S)) over the unpadded lowercase hex text
//
// Folds in S directly and omits K and the group binding. Reproduced verbatim
// from the deployed verifier family this convention interoperates with.
fn hex_string_m1<D: Digest>(a_pub: &BigUint, b_pub: &BigUint, premaster: &BigUint) -> Output<D> {
    let mut d = D::new();
    d.update(a_pub.to_str_radix(16).as_bytes());
    d.update(b_pub.to_str_radix(16).as_bytes());
    d.update(premaster.to_str_radix(16).as_bytes());
    d.finalize()
}

// M2 = H(A | M1 | K), identical in both conventions
#[must_use]
pub fn compute_m2<D: Digest>(a_pub: &BigUint, m1: &[u8], key: &[u8]) -> Output<D> {
    let mut d = D::new();
    d.update(a_pub.to_bytes_be());
    d.update(m1);
    d.update(key);
    d.finalize()
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use sha1::Sha1;

    use super::*;
    use crate::groups::G_1024;

    #[test]
    fn k_1024_sha1() {
        let k = compute_k::<Sha1>(&G_1024).unwrap();
        assert_eq!(
            k.to_bytes_be(),
            hex!("7556AA04 5AEF2CDD 07ABAF0F 665C3E81 8913186F")
        );
    }

    #[test]
    fn premaster_agrees_between_sides() {
        // n = 23, g = 5, with k, x, a, u, b picked by hand
        let group = SrpGroup {
            n: BigUint::from(23u32),
            g: BigUint::from(5u32),
        };
        let (k, x, a, u, b) = (
            BigUint::from(3u32),
            BigUint::from(6u32),
            BigUint::from(8u32),
            BigUint::from(2u32),
            BigUint::from(4u32),
        );
        let v = compute_v(&group, &x);
        assert_eq!(v, BigUint::from(8u32));

        // B = (k*v + g^b) % N
        let b_pub = (&k * &v + group.g.modpow(&b, &group.n)) % &group.n;
        assert_eq!(b_pub, BigUint::from(5u32));

        let client = compute_premaster_secret(&group, &b_pub, &k, &x, &a, &u);
        // server side: (A * v^u) ^ b % N
        let a_pub = group.g.modpow(&a, &group.n);
        let server = (&a_pub * v.modpow(&u, &group.n)).modpow(&b, &group.n);
        assert_eq!(client, server);
        assert_eq!(client, BigUint::from(13u32));
    }
}
