use core::fmt::Debug;

use alloc::format;

use embedded_io::{ErrorType as SyncErrorType, Read as SyncRead, Write as SyncWrite};
use embedded_io_async::{ErrorType as AsyncErrorType, Read as AsyncRead, Write as AsyncWrite};

use crate::wire::{Packet, WIRE_SIZE, WireError};

/// Async packet link over a raw byte stream.
///
/// Moves exactly one wire packet per exchange; framing, retries and
/// delivery guarantees stay with the underlying transport.
#[derive(Debug)]
pub struct AsyncFrameLink<IO> {
    io: IO,
}

/// Sync packet link over a raw byte stream.
#[derive(Debug)]
pub struct SyncFrameLink<IO> {
    io: IO,
}

macro_rules! impl_link_common {
    ($link:ident) => {
        impl<IO> $link<IO> {
            pub fn new(io: IO) -> Self {
                Self { io }
            }

            pub fn inner(&self) -> &IO {
                &self.io
            }

            pub fn inner_mut(&mut self) -> &mut IO {
                &mut self.io
            }

            pub fn into_inner(self) -> IO {
                self.io
            }
        }
    };
}

impl_link_common!(AsyncFrameLink);
impl_link_common!(SyncFrameLink);

impl<IO> AsyncFrameLink<IO>
where
    IO: AsyncRead + AsyncWrite + AsyncErrorType,
    IO::Error: Debug,
{
    /// Writes one packet to the link
    pub async fn send(&mut self, packet: &Packet) -> Result<(), WireError> {
        self.io
            .write_all(&packet.encode())
            .await
            .map_err(|e| WireError::Io(format!("{:?}", e)))?;
        self.io
            .flush()
            .await
            .map_err(|e| WireError::Io(format!("{:?}", e)))
    }

    /// Reads exactly one packet from the link
    pub async fn receive(&mut self) -> Result<Packet, WireError> {
        let mut buffer = [0u8; WIRE_SIZE];
        self.io
            .read_exact(&mut buffer)
            .await
            .map_err(|e| WireError::Io(format!("{:?}", e)))?;
        Packet::decode(&buffer)
    }
}

impl<IO> SyncFrameLink<IO>
where
    IO: SyncRead + SyncWrite + SyncErrorType,
    IO::Error: Debug,
{
    /// Writes one packet to the link
    pub fn send(&mut self, packet: &Packet) -> Result<(), WireError> {
        self.io
            .write_all(&packet.encode())
            .map_err(|e| WireError::Io(format!("{:?}", e)))?;
        self.io
            .flush()
            .map_err(|e| WireError::Io(format!("{:?}", e)))
    }

    /// Reads exactly one packet from the link
    pub fn receive(&mut self) -> Result<Packet, WireError> {
        let mut buffer = [0u8; WIRE_SIZE];
        self.io
            .read_exact(&mut buffer)
            .map_err(|e| WireError::Io(format!("{:?}", e)))?;
        Packet::decode(&buffer)
    }
}

#[cfg(test)]
mod sync_tests {
    use alloc::vec::Vec;

    use crate::event::Event;
    use crate::identity::MacAddress;

    use super::*;

    /// Mock IO for sync testing
    #[derive(Debug, Default)]
    struct SyncMockIo {
        read_data: Vec<u8>,
        write_data: Vec<u8>,
        read_pos: usize,
    }

    impl SyncMockIo {
        fn with_data(data: Vec<u8>) -> Self {
            Self {
                read_data: data,
                ..Self::default()
            }
        }

        fn written_data(&self) -> &[u8] {
            &self.write_data
        }
    }

    impl embedded_io::ErrorType for SyncMockIo {
        type Error = embedded_io::ErrorKind;
    }

    impl embedded_io::Read for SyncMockIo {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let available = self.read_data.len() - self.read_pos;
            if available == 0 {
                return Ok(0);
            }

            let n = buf.len().min(available);
            buf[..n].copy_from_slice(&self.read_data[self.read_pos..self.read_pos + n]);
            self.read_pos += n;
            Ok(n)
        }
    }

    impl embedded_io::Write for SyncMockIo {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.write_data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn sample_packet() -> Packet {
        Packet {
            sender: 9,
            event: Event::StatusResponse.code(),
            info: 98_765,
            source_mac: MacAddress::new([0xF0, 0x24, 0xF9, 0x98, 0xAD, 0xA8]),
        }
    }

    #[test]
    fn test_sync_send_writes_one_frame() {
        let mut link = SyncFrameLink::new(SyncMockIo::default());
        link.send(&sample_packet()).unwrap();

        assert_eq!(link.inner().written_data().len(), WIRE_SIZE);
        assert_eq!(link.inner().written_data(), sample_packet().encode().as_slice());
    }

    #[test]
    fn test_sync_round_trip() {
        let packet = sample_packet();
        let mut link = SyncFrameLink::new(SyncMockIo::with_data(packet.encode().to_vec()));

        assert_eq!(link.receive().unwrap(), packet);
    }

    #[test]
    fn test_sync_receive_consumes_back_to_back_frames() {
        let first = sample_packet();
        let second = Packet {
            event: Event::Arm.code(),
            info: 7,
            ..first
        };

        let mut data = first.encode().to_vec();
        data.extend_from_slice(&second.encode());
        let mut link = SyncFrameLink::new(SyncMockIo::with_data(data));

        assert_eq!(link.receive().unwrap(), first);
        assert_eq!(link.receive().unwrap(), second);
    }

    #[test]
    fn test_sync_receive_short_stream_fails() {
        let mut link = SyncFrameLink::new(SyncMockIo::with_data(alloc::vec![0u8; 5]));

        assert!(matches!(link.receive(), Err(WireError::Io(_))));
    }
}

#[cfg(test)]
mod async_tests {
    use alloc::vec::Vec;

    use crate::event::Event;
    use crate::identity::MacAddress;

    use super::*;

    /// Mock IO for async testing
    #[derive(Debug, Default)]
    struct AsyncMockIo {
        read_data: Vec<u8>,
        write_data: Vec<u8>,
        read_pos: usize,
    }

    impl AsyncMockIo {
        fn with_data(data: Vec<u8>) -> Self {
            Self {
                read_data: data,
                ..Self::default()
            }
        }

        fn written_data(&self) -> &[u8] {
            &self.write_data
        }
    }

    impl embedded_io_async::ErrorType for AsyncMockIo {
        type Error = embedded_io_async::ErrorKind;
    }

    impl embedded_io_async::Read for AsyncMockIo {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let available = self.read_data.len() - self.read_pos;
            if available == 0 {
                return Ok(0);
            }

            let n = buf.len().min(available);
            buf[..n].copy_from_slice(&self.read_data[self.read_pos..self.read_pos + n]);
            self.read_pos += n;
            Ok(n)
        }
    }

    impl embedded_io_async::Write for AsyncMockIo {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.write_data.extend_from_slice(buf);
            Ok(buf.len())
        }

        async fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn sample_packet() -> Packet {
        Packet {
            sender: 99,
            event: Event::StatusRequest.code(),
            info: 0,
            source_mac: MacAddress::new([0xCC, 0x7B, 0x5C, 0x31, 0x01, 0x00]),
        }
    }

    #[tokio::test]
    async fn test_async_send_writes_one_frame() {
        let mut link = AsyncFrameLink::new(AsyncMockIo::default());
        link.send(&sample_packet()).await.unwrap();

        assert_eq!(link.inner().written_data(), sample_packet().encode().as_slice());
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let packet = sample_packet();
        let mut link = AsyncFrameLink::new(AsyncMockIo::with_data(packet.encode().to_vec()));

        assert_eq!(link.receive().await.unwrap(), packet);
    }

    #[tokio::test]
    async fn test_async_receive_short_stream_fails() {
        let mut link = AsyncFrameLink::new(AsyncMockIo::with_data(alloc::vec![0u8; 11]));

        assert!(matches!(link.receive().await, Err(WireError::Io(_))));
    }
}
