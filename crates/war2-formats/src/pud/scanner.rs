//! Sequential section scanner
//!
//! Sections are written once, in catalog order. The scanner remembers the
//! last section it located: requesting a later one continues forward from
//! the current position, requesting an earlier one rewinds to byte 0 first.
//! Requesting the section already under the cursor seeks straight back to
//! its payload.

use crate::pud::error::{PudError, PudResult};
use crate::pud::section::Section;
use std::io::{self, Read, Seek, SeekFrom};
use tracing::trace;

/// Tag-driven cursor over a PUD byte stream
#[derive(Debug)]
pub struct SectionScanner<R> {
    reader: R,
    cursor: Option<Section>,
    /// Stream position right after the tag of `cursor`
    cursor_end: Option<u64>,
    rewinds: usize,
}

impl<R: Read + Seek> SectionScanner<R> {
    /// Wrap a stream positioned at its start
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            cursor: None,
            cursor_end: None,
            rewinds: 0,
        }
    }

    /// Last section located, or the final section after a failed search
    pub fn cursor(&self) -> Option<Section> {
        self.cursor
    }

    /// Number of rewinds to byte 0 performed so far
    pub fn rewinds(&self) -> usize {
        self.rewinds
    }

    /// Current byte position in the stream
    pub fn position(&mut self) -> PudResult<u64> {
        Ok(self.reader.stream_position()?)
    }

    /// Seek back to the start of the stream
    pub fn rewind(&mut self) -> PudResult<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.rewinds += 1;
        trace!("Rewound to start of map");
        Ok(())
    }

    /// Move the stream right past the tag of `target`
    pub fn go_to(&mut self, target: Section) -> PudResult<()> {
        if let (Some(current), Some(end)) = (self.cursor, self.cursor_end) {
            if current == target {
                self.reader.seek(SeekFrom::Start(end))?;
                trace!("Section {} already under cursor", target);
                return Ok(());
            }
        }

        if self.cursor.is_some_and(|current| target <= current) {
            self.rewind()?;
        }

        let tag = target.tag();
        let mut window = [0u8; 4];
        let mut seen = 0usize;

        let mut byte = [0u8; 1];

        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
            window.rotate_left(1);
            window[3] = byte[0];
            seen += 1;

            if seen >= 4 && &window == tag {
                let end = self.reader.stream_position()?;
                self.cursor = Some(target);
                self.cursor_end = Some(end);
                trace!("At section {} (offset {})", target, end - 4);
                return Ok(());
            }
        }

        self.cursor = Some(Section::last());
        self.cursor_end = None;
        Err(PudError::MissingSection(target))
    }

    /// Whether `section` exists in the stream
    pub fn contains(&mut self, section: Section) -> PudResult<bool> {
        match self.go_to(section) {
            Ok(()) => Ok(true),
            Err(PudError::MissingSection(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Locate `section` and read its length-prefixed payload
    pub fn payload(&mut self, section: Section) -> PudResult<Vec<u8>> {
        self.go_to(section)?;

        let mut len = [0u8; 4];
        self.reader.read_exact(&mut len).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                PudError::TruncatedSection {
                    section,
                    needed: 4,
                    available: 0,
                }
            } else {
                PudError::Io(e)
            }
        })?;
        let len = u32::from_le_bytes(len) as usize;

        let mut data = Vec::with_capacity(len.min(1 << 20));
        (&mut self.reader).take(len as u64).read_to_end(&mut data)?;
        if data.len() < len {
            return Err(PudError::TruncatedSection {
                section,
                needed: len,
                available: data.len(),
            });
        }

        trace!("Section {} payload is {} bytes", section, len);
        Ok(data)
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> R {
        self.reader
    }
}
