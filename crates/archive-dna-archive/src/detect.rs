use std::io::{self, Read, Seek};

/// ZIP signatures are `PK..`: local file header (03 04), end of central
/// directory (05 06, an archive with no entries) and spanned marker (07 08).
pub fn is_zip_magic(header: &[u8]) -> bool {
    matches!(header, [b'P', b'K', 3, 4, ..] | [b'P', b'K', 5, 6, ..] | [b'P', b'K', 7, 8, ..])
}

/// Peeks at the first bytes and rewinds. Inputs shorter than a signature are
/// not archives.
pub fn sniff_zip<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = [0u8; 4];
    let found = match reader.read_exact(&mut header) {
        Ok(()) => is_zip_magic(&header),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
        Err(e) => return Err(e),
    };
    reader.rewind()?;
    Ok(found)
}
