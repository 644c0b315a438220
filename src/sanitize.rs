//! Attribute-buffer sanitizer.
//!
//! GPFS hands back the DMAPI attribute blob as opaque binary. The HSM
//! marker strings live in its printable portion, with byte `0x01` acting
//! as a field separator between attribute records. Sanitizing projects
//! the blob onto printable text so the classifier can run plain substring
//! searches over it.

/// Field-separator byte used inside the raw attribute blob.
pub const FIELD_SEPARATOR: u8 = 0x01;

/// Visible stand-in for [`FIELD_SEPARATOR`] in sanitized text.
pub const DELIMITER: char = '|';

/// Project a raw attribute buffer onto printable text.
///
/// Keeps exactly the printable bytes (space through `~`) of `buf` in their
/// original order, and re-inserts the non-printable [`FIELD_SEPARATOR`] as
/// [`DELIMITER`]. Every other byte is dropped. Never fails; the output is
/// never longer than the input.
pub fn sanitize_attrs(buf: &[u8]) -> String {
    let mut text = String::with_capacity(buf.len());
    for &byte in buf {
        if byte == b' ' || byte.is_ascii_graphic() {
            text.push(byte as char);
        } else if byte == FIELD_SEPARATOR {
            text.push(DELIMITER);
        }
    }
    text
}
