use std::{io, sync::Arc, time::Duration};

use rocpp_core::{
    format::message::{EncodeDecode, Frame, OcppMessage},
    v16::protocol_error::ProtocolError,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::Mutex,
};

use crate::v16::events::frame::FrameDrop;

/// Reads one frame per line. Lines that are not a well formed Call,
/// CallResult or CallError come back as a [`FrameDrop`].
pub struct FrameReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// `Ok(None)` once the input is closed.
    pub async fn next_frame(
        &mut self,
    ) -> io::Result<Option<Result<OcppMessage<ProtocolError>, FrameDrop>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        let line = match std::str::from_utf8(&self.buf) {
            Ok(line) => line.trim(),
            Err(_) => return Ok(Some(Err(FrameDrop::NotUtf8))),
        };
        if line.is_empty() {
            return Ok(Some(Err(FrameDrop::Empty)));
        }
        log::info!("[MSG_IN] {}", line);
        Ok(Some(decode_frame(line.to_string())))
    }
}

pub fn decode_frame(line: String) -> Result<OcppMessage<ProtocolError>, FrameDrop> {
    match OcppMessage::<ProtocolError>::decode(line) {
        OcppMessage::Invalid(invalid) => Err(FrameDrop::Malformed(invalid)),
        msg => Ok(msg),
    }
}

/// Serialized output sink. Clones share the sink; each frame is written and
/// flushed while holding the lock, so lines from different senders never
/// interleave.
pub struct FrameWriter<W> {
    sink: Arc<Mutex<W>>,
    burst_delay: Duration,
}

impl<W> Clone for FrameWriter<W> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            burst_delay: self.burst_delay,
        }
    }
}

impl<W: AsyncWrite + Unpin + Send> FrameWriter<W> {
    pub fn new(sink: W, burst_delay: Duration) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
            burst_delay,
        }
    }

    pub async fn emit(&self, frame: &Frame<ProtocolError>) -> io::Result<()> {
        let mut line = frame.encode();
        log::info!("[MSG_OUT] {}", line);
        line.push('\n');
        let mut sink = self.sink.lock().await;
        sink.write_all(line.as_bytes()).await?;
        sink.flush().await
    }

    /// Writes the frames in order. A burst of more than one frame is paced by
    /// the burst delay so the receiver sees them in the same order.
    pub async fn emit_all(&self, frames: Vec<Frame<ProtocolError>>) -> io::Result<()> {
        let paced = frames.len() > 1;
        for frame in frames {
            self.emit(&frame).await?;
            if paced {
                tokio::time::sleep(self.burst_delay).await;
            }
        }
        Ok(())
    }
}
