//! # Payment Signature Verification
//!
//! Razorpay signs each successful checkout with
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`, hex encoded.
//! The client posts that signature back and we recompute and compare it.

use gateway_core::{PaymentError, PaymentResult};

/// Separator between order id and payment id in the signed message
const SIGNATURE_SEPARATOR: char = '|';

/// Compute the expected payment signature for an order/payment pair.
///
/// Returns the lowercase hex encoding of
/// `HMAC-SHA256(key_secret, order_id + "|" + payment_id)`.
pub fn expected_signature(key_secret: &str, order_id: &str, payment_id: &str) -> String {
    let message = format!("{}{}{}", order_id, SIGNATURE_SEPARATOR, payment_id);
    compute_hmac_sha256(key_secret, &message)
}

/// Verify a payment callback signature.
///
/// The comparison is constant time over the hex strings, so the check leaks
/// no timing information about the expected digest.
pub fn verify_payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
    signature: &str,
) -> PaymentResult<()> {
    let expected = expected_signature(key_secret, order_id, payment_id);

    if constant_time_compare(&expected, signature) {
        Ok(())
    } else {
        Err(PaymentError::SignatureMismatch)
    }
}

fn compute_hmac_sha256(secret: &str, message: &str) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
