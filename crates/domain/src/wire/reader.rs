/// Forward-only cursor over a whole packet.
///
/// The full packet stays reachable through [`WireReader::packet`] so the name
/// decoder can resolve compression pointers against absolute offsets.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    packet: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(packet: &'a [u8]) -> Self {
        Self { packet, pos: 0 }
    }

    /// Cursor starting at `pos` (clamped to the packet length).
    pub fn at(packet: &'a [u8], pos: usize) -> Self {
        Self {
            packet,
            pos: pos.min(packet.len()),
        }
    }

    pub fn packet(&self) -> &'a [u8] {
        self.packet
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.packet.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub(crate) fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.packet.len());
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        let b = *self.packet.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    pub fn read_u16(&mut self) -> Option<u16> {
        let bytes = self.read_bytes(2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Option<u32> {
        let bytes = self.read_bytes(4)?;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads exactly `len` bytes or nothing at all.
    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let bytes = self.packet.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }
}
