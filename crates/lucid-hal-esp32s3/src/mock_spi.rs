//! Recording SPI device for the adapter tests.

use std::collections::VecDeque;

use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

/// Captures every transaction as one byte frame and answers register
/// reads from a queue of canned values.
pub struct MockSpi {
    pub frames: Vec<Vec<u8>>,
    pub read_values: VecDeque<u32>,
}

impl MockSpi {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            read_values: VecDeque::new(),
        }
    }

    pub fn with_reads(values: &[u32]) -> Self {
        let mut mock = Self::new();
        mock.read_values.extend(values);
        mock
    }
}

impl ErrorType for MockSpi {
    type Error = core::convert::Infallible;
}

impl SpiDevice<u8> for MockSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut frame = Vec::new();
        for op in operations.iter_mut() {
            match op {
                Operation::Write(data) => frame.extend_from_slice(data),
                Operation::Read(buf) => {
                    let value = self.read_values.pop_front().unwrap_or(0);
                    for (dst, src) in buf.iter_mut().zip(value.to_le_bytes()) {
                        *dst = src;
                    }
                }
                _ => {}
            }
        }
        self.frames.push(frame);
        Ok(())
    }
}
