use crate::error::sign_err::SignError;
use libsecp256k1::{Message, SecretKey};

/// sign a tron tx id (sha256 of raw_data) with a secp256k1 key, 65 bytes hex out
pub fn sign_tron(tx_id: &str, private_key: &str, recover: Option<u8>) -> Result<String, crate::Error> {
    let input = tx_id.strip_prefix("0x").unwrap_or(tx_id);

    let input_bytes = hex::decode(input).map_err(|e| SignError::Message(e.to_string()))?;
    let message =
        Message::parse_slice(&input_bytes).map_err(|e| SignError::Message(e.to_string()))?;

    let key_bytes = hex::decode(private_key).map_err(|e| SignError::KeyError(e.to_string()))?;
    let private_key =
        SecretKey::parse_slice(&key_bytes).map_err(|e| SignError::KeyError(e.to_string()))?;

    let (signature, recovery_id) = libsecp256k1::sign(&message, &private_key);

    let mut full_signature = vec![0u8; 65];
    let mut id: u8 = recovery_id.into();
    if let Some(recover) = recover {
        id += recover
    }

    full_signature[..64].copy_from_slice(&signature.serialize());
    full_signature[64] = id;

    Ok(hex::encode(full_signature))
}
