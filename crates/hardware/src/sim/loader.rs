//! Program Image Loader.
//!
//! This module turns LS-8 program images into bytes and places them in memory. It performs:
//! 1. **Parsing:** One binary byte literal per line; `#` starts a comment; blank lines are skipped.
//! 2. **File loading:** Reads an image from disk, reporting a missing file separately.
//! 3. **Installation:** Writes the parsed bytes into the CPU's memory from address 0.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{LoadError, SimError};
use crate::core::Cpu;

/// Comment delimiter in program images.
const COMMENT_MARKER: char = '#';

/// Parses one line of a program image.
///
/// # Returns
///
/// `Ok(None)` for a line that is empty once the comment and surrounding whitespace
/// are removed, `Ok(Some(byte))` for a valid binary literal.
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the remaining text is not binary digits or
/// its value does not fit in a byte. Leading zeros are allowed.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<u8>, LoadError> {
    let code = line
        .split_once(COMMENT_MARKER)
        .map_or(line, |(code, _)| code)
        .trim();
    if code.is_empty() {
        return Ok(None);
    }
    let malformed = || LoadError::Malformed {
        line: line_no,
        text: code.to_string(),
    };
    if !code.bytes().all(|c| c == b'0' || c == b'1') {
        return Err(malformed());
    }
    u8::from_str_radix(code, 2).map(Some).map_err(|_| malformed())
}

/// Parses a whole program image.
///
/// # Errors
///
/// * `LoadError::Malformed` - a non-empty line is not a binary literal.
/// * `LoadError::ProgramTooLarge` - the image holds more than 256 bytes.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let image = parse_program("10000010 # LDI\n00000000\n\n00001000\n").unwrap();
/// assert_eq!(image, vec![0b1000_0010, 0, 8]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(byte) = parse_line(line_no, line)? {
            if image.len() == MEMORY_SIZE {
                return Err(LoadError::ProgramTooLarge {
                    index: image.len(),
                    line: line_no,
                });
            }
            image.push(byte);
        }
    }
    Ok(image)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// * `LoadError::FileNotFound` - `path` does not exist.
/// * `LoadError::Io` - `path` exists but cannot be read.
/// * Any error from [`parse_program`].
pub fn load_program_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    let image = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Loads a program image file into a CPU's memory from address 0.
///
/// # Errors
///
/// Returns `SimError::Load` for file and parse failures.
pub fn load_into<W: Write>(cpu: &mut Cpu<W>, path: &Path) -> Result<usize, SimError> {
    let image = load_program_file(path)?;
    cpu.load_program(&image)?;
    Ok(image.len())
}
