use std::io::{self, Read, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::UsageReport;
use crate::tracker::TrackerService;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum IncomingMessage {
    #[serde(rename = "get_screen_time")]
    GetScreenTime,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum OutgoingMessage {
    #[serde(rename = "screen_time")]
    ScreenTime {
        #[serde(flatten)]
        report: UsageReport,
    },
}

/// Request/response glue between the tracker and a GUI layer.
///
/// Speaks length-prefixed JSON (u32 little-endian frame length, then the
/// payload) over any reader/writer pair; the binary wires stdin/stdout. One
/// request, one response; EOF from the peer ends the session.
pub struct QueryHost {
    tracker: Arc<TrackerService>,
}

impl QueryHost {
    // Frames above this are protocol violations, not real requests.
    const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

    pub fn new(tracker: Arc<TrackerService>) -> Self {
        Self { tracker }
    }

    pub fn run<R: Read, W: Write>(&self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        loop {
            let message = Self::read_message(reader)?;
            let response = self.handle_message(message);
            Self::write_message(writer, &response)?;
        }
    }

    fn read_message<R: Read>(reader: &mut R) -> io::Result<IncomingMessage> {
        let mut len_bytes = [0u8; 4];
        reader.read_exact(&mut len_bytes)?;
        let len = u32::from_le_bytes(len_bytes) as usize;

        if len > Self::MAX_MESSAGE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Message too large: {} bytes (max: {} bytes)",
                    len,
                    Self::MAX_MESSAGE_SIZE
                ),
            ));
        }

        let mut buffer = vec![0u8; len];
        reader.read_exact(&mut buffer)?;

        serde_json::from_slice(&buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_message<W: Write>(writer: &mut W, message: &OutgoingMessage) -> io::Result<()> {
        let json = serde_json::to_vec(message)?;
        let len = json.len() as u32;

        writer.write_all(&len.to_le_bytes())?;
        writer.write_all(&json)?;
        writer.flush()?;

        Ok(())
    }

    fn handle_message(&self, message: IncomingMessage) -> OutgoingMessage {
        match message {
            IncomingMessage::GetScreenTime => OutgoingMessage::ScreenTime {
                report: self.tracker.screen_time(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::models::BeneficialPolicy;
    use crate::platform::StubDetector;
    use crate::tracker::TrackerConfig;
    use std::io::Cursor;

    fn host() -> QueryHost {
        let tracker = TrackerService::new(
            Arc::new(StubDetector::default()),
            Arc::new(Classifier::with_default_rules()),
            BeneficialPolicy::default(),
            TrackerConfig::default(),
        );
        QueryHost::new(Arc::new(tracker))
    }

    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut framed = (payload.len() as u32).to_le_bytes().to_vec();
        framed.extend_from_slice(payload);
        framed
    }

    #[test]
    fn test_get_screen_time_round_trip() {
        let host = host();
        let mut input = Cursor::new(frame(br#"{"type":"get_screen_time"}"#));
        let mut output = Vec::new();

        // EOF after the single request ends the session.
        let err = host.run(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let len = u32::from_le_bytes(output[..4].try_into().unwrap()) as usize;
        assert_eq!(len, output.len() - 4);

        let response: serde_json::Value = serde_json::from_slice(&output[4..]).unwrap();
        assert_eq!(response["type"], "screen_time");
        assert!(response["apps"].is_object());
        assert!(response["categories"].is_array());
    }

    #[test]
    fn test_oversized_frame_is_rejected() {
        let host = host();
        let mut input = Cursor::new((2 * 1024 * 1024u32).to_le_bytes().to_vec());
        let mut output = Vec::new();

        let err = host.run(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(output.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let host = host();
        let mut input = Cursor::new(frame(b"not json"));
        let mut output = Vec::new();

        let err = host.run(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
