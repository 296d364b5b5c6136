// Copyright (c) 2025-2026 The Kaia Authors

/// Variable length hex encoded data, with optional `0x` prefix
#[derive(Clone, PartialEq, Debug)]
pub struct HexData(pub Vec<u8>);

impl std::str::FromStr for HexData {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);

        Ok(HexData(hex::decode(s)?))
    }
}

impl AsRef<[u8]> for HexData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::string::ToString for HexData {
    fn to_string(&self) -> String {
        hex::encode(&self.0)
    }
}
