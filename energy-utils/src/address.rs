use crate::error::parse::ParseError;
use sha2::Digest as _;

/// convert base58check address to 21 bytes hex (41 prefix)
pub fn bs58_addr_to_hex(bs58_addr: &str) -> Result<String, crate::Error> {
    let bs58_addr = bs58_addr.trim();
    let bytes = bs58::decode(bs58_addr).into_vec().map_err(|_| {
        crate::Error::Parse(ParseError::AddressConvertFailed(bs58_addr.to_string()))
    })?;
    if bytes.len() != 25 {
        return Err(crate::Error::Parse(ParseError::AddressConvertFailed(
            bs58_addr.to_string(),
        )));
    }
    Ok(hex::encode(&bytes[..21]))
}

/// convert 21 bytes hex (41 prefix) back to base58check
pub fn hex_to_bs58_addr(hex_addr: &str) -> Result<String, crate::Error> {
    let hex_addr = hex_addr.trim();
    let bytes = hex::decode(hex_addr)
        .map_err(|_| crate::Error::Parse(ParseError::AddressConvertFailed(hex_addr.to_string())))?;
    if bytes.len() != 21 {
        return Err(crate::Error::Parse(ParseError::AddressConvertFailed(
            hex_addr.to_string(),
        )));
    }
    let hash = sha2::Sha256::digest(sha2::Sha256::digest(&bytes));
    let mut payload = bytes;
    payload.extend_from_slice(&hash[..4]);
    Ok(bs58::encode(payload).into_string())
}

/// base58check validation: length, prefix and double sha256 checksum
pub fn is_tron_address(address: &str) -> bool {
    let address = address.trim();
    if address.len() != 34 || !address.starts_with('T') {
        return false;
    }

    if let Ok(decoded) = bs58::decode(address).into_vec() {
        if decoded.len() == 25 {
            let (data, checksum) = decoded.split_at(21);
            let hash = sha2::Sha256::digest(sha2::Sha256::digest(data));
            return &hash[..4] == checksum;
        }
    }
    false
}

/// syntactic check only: `T` + 33 base58 chars
pub fn is_base58_shaped(address: &str) -> bool {
    let address = address.trim();
    address.len() == 34
        && address.starts_with('T')
        && address[1..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() && c != '0' && c != 'O' && c != 'I' && c != 'l')
}

/// syntactic check only: `41` + 40 hex chars
pub fn is_hex_shaped(address: &str) -> bool {
    let address = address.trim();
    address.len() == 42
        && address.starts_with("41")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// fraction of position-wise equal chars over the longer length
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longer = a.len().max(b.len());
    if longer == 0 {
        return 0.0;
    }
    let matching = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matching as f64 / longer as f64
}
