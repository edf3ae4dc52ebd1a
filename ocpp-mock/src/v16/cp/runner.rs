use std::io;

use rand::{rngs::SmallRng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncWrite, BufReader};
use tokio_util::sync::CancellationToken;

use crate::v16::{
    services::{
        frame::{FrameReader, FrameWriter},
        meter::MeterEmitter,
    },
    state_machine::clock::Clock,
};

use super::{config::MockConfig, core::ChargePointCore};

/// Mock charge point bound to a line-oriented transport.
pub struct ChargePoint<C: Clock> {
    core: ChargePointCore<C>,
    config: MockConfig,
}

impl<C: Clock> ChargePoint<C> {
    pub fn new(config: MockConfig, clock: C, rng: SmallRng) -> Self {
        Self {
            core: ChargePointCore::new(&config, clock, rng),
            config,
        }
    }

    pub fn core(&self) -> &ChargePointCore<C> {
        &self.core
    }

    /// Serves frames from `input` until it is closed. The meter sender, when
    /// configured, runs alongside and is stopped before returning.
    pub async fn run<R, W>(mut self, input: R, output: W) -> io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let writer = FrameWriter::new(output, self.config.burst_delay());
        let stop = CancellationToken::new();
        let meter = self.config.meter_interval().map(|interval| {
            log::info!("sending MeterValues every {:?} while charging", interval);
            let emitter = MeterEmitter::new(
                self.core.session.clone(),
                writer.clone(),
                self.core.clock.clone(),
                SmallRng::from_rng(&mut self.core.rng),
                interval,
            );
            tokio::spawn(emitter.run(stop.clone()))
        });

        let res = serve(&mut self.core, FrameReader::new(BufReader::new(input)), &writer).await;

        stop.cancel();
        if let Some(handle) = meter {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("meter sender failed: {}", e),
                Err(e) => log::error!("meter sender panicked: {}", e),
            }
        }
        res
    }
}

/// The request loop: one frame at a time, each fully answered before the
/// next line is read. Dropped frames are logged and skipped.
pub async fn serve<C, R, W>(
    core: &mut ChargePointCore<C>,
    mut reader: FrameReader<R>,
    writer: &FrameWriter<W>,
) -> io::Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send,
{
    while let Some(next) = reader.next_frame().await? {
        match next {
            Ok(msg) => {
                let frames = core.got_msg(msg);
                writer.emit_all(frames).await?;
            }
            Err(reason) => log::debug!("dropping frame: {}", reason),
        }
    }
    log::info!("input closed");
    Ok(())
}
