use crate::Error;

pub struct BufferReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BufferReader<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> BufferReader<'a> {
        Self { buffer, offset: 0 }
    }

    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    pub fn seek(&mut self, offset: usize) -> Result<(), Error> {
        if offset > self.buffer.len() {
            return Err(Error::new(format!("Seek to {} past end of buffer ({} bytes)", offset, self.buffer.len())));
        }
        self.offset = offset;
        Ok(())
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_buffer(1)?[0])
    }

    #[inline(always)]
    pub fn read_u64_le(&mut self) -> Result<u64, Error> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.read_buffer(8)?);
        Ok(u64::from_le_bytes(bytes))
    }

    #[inline(always)]
    pub fn read_buffer(&mut self, length: usize) -> Result<&'a [u8], Error> {
        let end = self
            .offset
            .checked_add(length)
            .filter(|end| *end <= self.buffer.len())
            .ok_or_else(|| {
                Error::new(format!(
                    "Read of {} bytes at offset {} past end of buffer ({} bytes)",
                    length,
                    self.offset,
                    self.buffer.len()
                ))
            })?;
        let buffer = &self.buffer[self.offset..end];
        self.offset = end;
        Ok(buffer)
    }
}
