use std::{io, time::Duration};

use rand::rngs::SmallRng;
use rocpp_core::{format::message::Frame, v16::protocol_error::ProtocolError};
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use crate::v16::{
    payloads,
    state_machine::{
        call::{build_call, CallAction},
        clock::Clock,
        session::Session,
    },
};

use super::frame::FrameWriter;

const ENERGY_STEP_WH: u64 = 100;

/// Sends synthetic `MeterValues` while the session is charging. Runs next to
/// the request loop and shares its writer.
pub struct MeterEmitter<C: Clock, W> {
    session: Session,
    writer: FrameWriter<W>,
    clock: C,
    rng: SmallRng,
    interval: Duration,
    energy_wh: u64,
}

impl<C: Clock, W: AsyncWrite + Unpin + Send> MeterEmitter<C, W> {
    pub fn new(
        session: Session,
        writer: FrameWriter<W>,
        clock: C,
        rng: SmallRng,
        interval: Duration,
    ) -> Self {
        Self {
            session,
            writer,
            clock,
            rng,
            interval,
            energy_wh: 0,
        }
    }

    /// Next reading, or `None` while idle. The register restarts from zero
    /// for every charging session.
    pub fn sample(&mut self) -> Option<Frame<ProtocolError>> {
        let session = self.session.snapshot();
        if !session.is_charging {
            self.energy_wh = 0;
            return None;
        }
        self.energy_wh += ENERGY_STEP_WH;
        let payload = payloads::meter_values_request(
            session.connector_id,
            session.transaction_id,
            self.energy_wh,
            self.clock.now(),
        );
        Some(build_call(&mut self.rng, CallAction::MeterValues, payload))
    }

    pub async fn run(mut self, stop: CancellationToken) -> io::Result<()> {
        let mut ticker = tokio::time::interval(self.interval);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = stop.cancelled() => break,
                _ = ticker.tick() => {
                    if let Some(frame) = self.sample() {
                        self.writer.emit(&frame).await?;
                    }
                }
            }
        }
        log::debug!("meter sender stopped");
        Ok(())
    }
}
