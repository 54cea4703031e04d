pub struct BufferWriter {
    buffer: Vec<u8>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.write_buffer(&[value]);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.write_buffer(&value.to_le_bytes());
    }

    pub fn write_buffer(&mut self, value: &[u8]) {
        self.buffer.extend_from_slice(value);
    }

    pub fn write_zeros(&mut self, length: usize) {
        self.buffer.resize(self.buffer.len() + length, 0);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer(self) -> Vec<u8> {
        self.buffer
    }
}
