//! Registry value data as the Run list shows it.
//!
//! Run values are normally `REG_SZ`, but anything can be stored under the
//! key; every type is rendered to a string rather than rejected, and is
//! written back with its original type.

use startup_items_core::ValueKind;

pub const REG_SZ: u32 = 1;
pub const REG_EXPAND_SZ: u32 = 2;
pub const REG_BINARY: u32 = 3;
pub const REG_DWORD: u32 = 4;
pub const REG_MULTI_SZ: u32 = 7;
pub const REG_QWORD: u32 = 11;

/// Converts raw value bytes of registry type `kind` to a string.
///
/// Strings are decoded up to their terminating NUL; `REG_MULTI_SZ` parts
/// are joined with spaces; integers are printed in decimal; anything else
/// becomes lowercase hex.
pub fn decode(kind: u32, data: &[u8]) -> String {
    match kind {
        REG_SZ | REG_EXPAND_SZ => utf16_until_nul(data),
        REG_MULTI_SZ => utf16_units(data)
            .split(|&c| c == 0)
            .filter(|part| !part.is_empty())
            .map(String::from_utf16_lossy)
            .collect::<Vec<_>>()
            .join(" "),
        REG_DWORD if data.len() >= 4 => {
            u32::from_le_bytes([data[0], data[1], data[2], data[3]]).to_string()
        }
        REG_QWORD if data.len() >= 8 => {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&data[..8]);
            u64::from_le_bytes(bytes).to_string()
        }
        _ => data.iter().map(|b| format!("{b:02x}")).collect(),
    }
}

/// Tags a value read from the key with the type it must be written back as.
pub fn kind_of(kind: u32, data: &[u8], text: &str) -> ValueKind {
    match kind {
        REG_SZ => ValueKind::String,
        REG_EXPAND_SZ => ValueKind::ExpandString,
        _ => ValueKind::Raw {
            kind,
            data: data.to_vec(),
            text: text.to_string(),
        },
    }
}

/// Returns the registry type and bytes to store `text` with.
///
/// A raw value whose text was not edited keeps its type and bytes; once
/// edited it becomes a plain string.
pub fn encode(kind: &ValueKind, text: &str) -> (u32, Vec<u8>) {
    match kind {
        ValueKind::String => (REG_SZ, encode_string(text)),
        ValueKind::ExpandString => (REG_EXPAND_SZ, encode_string(text)),
        ValueKind::Raw {
            kind,
            data,
            text: shown,
        } if shown == text => (*kind, data.clone()),
        ValueKind::Raw { .. } => (REG_SZ, encode_string(text)),
    }
}

/// Encodes `s` as NUL-terminated UTF-16LE bytes for a `REG_SZ` write.
pub fn encode_string(s: &str) -> Vec<u8> {
    s.encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}

fn utf16_units(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

fn utf16_until_nul(data: &[u8]) -> String {
    let units = utf16_units(data);
    let len = units.iter().position(|&c| c == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_values_stop_at_the_terminator() {
        // Arrange
        let mut data = encode_string("\"C:\\app.exe\" --tray");
        data.extend_from_slice(&[0x41, 0x00]);

        // Act
        let text = decode(REG_SZ, &data);

        // Assert
        assert_eq!(text, "\"C:\\app.exe\" --tray");
    }

    #[test]
    fn unterminated_strings_are_read_to_the_end() {
        let data: Vec<u8> = "abc".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decode(REG_EXPAND_SZ, &data), "abc");
    }

    #[test]
    fn multi_strings_are_joined_with_spaces() {
        // Arrange
        let data: Vec<u8> = "one\0two\0\0"
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect();

        // Act
        let text = decode(REG_MULTI_SZ, &data);

        // Assert
        assert_eq!(text, "one two");
    }

    #[test]
    fn integers_are_printed_in_decimal() {
        assert_eq!(decode(REG_DWORD, &42u32.to_le_bytes()), "42");
        assert_eq!(decode(REG_QWORD, &(1u64 << 40).to_le_bytes()), "1099511627776");
    }

    #[test]
    fn other_types_become_hex() {
        assert_eq!(decode(REG_BINARY, &[0x00, 0xab, 0x10]), "00ab10");
        assert_eq!(decode(REG_DWORD, &[0x01]), "01");
    }

    #[test]
    fn encode_string_appends_a_nul() {
        assert_eq!(encode_string("A"), vec![0x41, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn expandable_strings_are_written_back_expandable() {
        // Arrange
        let data = encode_string("%ProgramFiles%\\app.exe");
        let text = decode(REG_EXPAND_SZ, &data);
        let kind = kind_of(REG_EXPAND_SZ, &data, &text);

        // Act
        let (written, bytes) = encode(&kind, &text);

        // Assert
        assert_eq!(kind, ValueKind::ExpandString);
        assert_eq!(written, REG_EXPAND_SZ);
        assert_eq!(bytes, data);
    }

    #[test]
    fn unedited_raw_values_keep_their_type_and_bytes() {
        // Arrange
        let data = 42u32.to_le_bytes().to_vec();
        let kind = kind_of(REG_DWORD, &data, &decode(REG_DWORD, &data));

        // Act
        let (written, bytes) = encode(&kind, "42");

        // Assert
        assert_eq!(written, REG_DWORD);
        assert_eq!(bytes, data);
    }

    #[test]
    fn edited_raw_values_become_strings() {
        // Arrange
        let data = vec![0x00, 0xab];
        let kind = kind_of(REG_BINARY, &data, "00ab");

        // Act
        let (written, bytes) = encode(&kind, "app.exe");

        // Assert
        assert_eq!(written, REG_SZ);
        assert_eq!(bytes, encode_string("app.exe"));
    }

    #[test]
    fn plain_strings_stay_plain() {
        assert_eq!(encode(&ValueKind::String, "A"), (REG_SZ, encode_string("A")));
        assert_eq!(kind_of(REG_SZ, &encode_string("A"), "A"), ValueKind::String);
    }
}
