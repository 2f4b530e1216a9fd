use std::io;

use prost::Message as _;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    net::TcpStream,
    sync::mpsc::Sender,
    task::JoinHandle,
};

use crate::{
    core::domain::HostEvent,
    gauge::messages::{Message, message::MessageType},
};

const MAX_VARINT_LEN: usize = 10;
/// Upper bound for a single host message; a suite result is far smaller.
const MAX_FRAME_LEN: usize = 64 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("Could not connect to gauge at {addr}: {source}")]
    Connect { addr: String, source: io::Error },
    #[error("Failed to read from gauge connection: {0}")]
    Read(#[source] io::Error),
    #[error("Malformed message length prefix")]
    Framing,
    #[error("Message of {len} bytes exceeds the {} byte limit", MAX_FRAME_LEN)]
    FrameTooLarge { len: usize },
    #[error("Failed to decode gauge message: {0}")]
    Decode(#[from] prost::DecodeError),
}

#[tracing::instrument]
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, ListenerError> {
    let addr = format!("{}:{}", host, port);
    let stream = TcpStream::connect(&addr)
        .await
        .map_err(|source| ListenerError::Connect {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Connected to gauge at {}", addr);
    Ok(stream)
}

/// Decodes messages from the host until it closes the connection, asks the
/// plugin to stop, or nobody listens for events anymore.
pub fn read_messages<R>(
    mut reader: R,
    event_tx: Sender<HostEvent>,
) -> JoinHandle<Result<(), ListenerError>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(message) = read_message(&mut reader).await? {
            let Some(event) = to_event(message) else {
                continue;
            };
            let is_kill = event == HostEvent::Kill;

            if event_tx.send(event).await.is_err() {
                tracing::debug!("Event receiver dropped, stop reading");
                break;
            }
            if is_kill {
                tracing::debug!("Kill request received, stop reading");
                break;
            }
        }
        Ok::<(), ListenerError>(())
    })
}

async fn read_message<R>(reader: &mut R) -> Result<Option<Message>, ListenerError>
where
    R: AsyncRead + Unpin,
{
    let Some(len) = read_length_delimiter(reader).await? else {
        return Ok(None);
    };
    if len > MAX_FRAME_LEN {
        return Err(ListenerError::FrameTooLarge { len });
    }

    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .await
        .map_err(ListenerError::Read)?;

    Ok(Some(Message::decode(buf.as_slice())?))
}

/// `None` on a clean end of stream before the first byte of a frame.
async fn read_length_delimiter<R>(reader: &mut R) -> Result<Option<usize>, ListenerError>
where
    R: AsyncRead + Unpin,
{
    let mut header = Vec::with_capacity(MAX_VARINT_LEN);
    loop {
        let byte = match reader.read_u8().await {
            Ok(byte) => byte,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof && header.is_empty() => {
                return Ok(None);
            }
            Err(e) => return Err(ListenerError::Read(e)),
        };
        header.push(byte);

        if byte & 0x80 == 0 {
            return Ok(Some(prost::decode_length_delimiter(header.as_slice())?));
        }
        if header.len() == MAX_VARINT_LEN {
            return Err(ListenerError::Framing);
        }
    }
}

fn to_event(message: Message) -> Option<HostEvent> {
    match message.message_type() {
        MessageType::SuiteExecutionResult => {
            let Some(suite_result) = message
                .suite_execution_result
                .and_then(|result| result.suite_result)
            else {
                tracing::warn!("Suite execution result without a suite result");
                return None;
            };
            Some(HostEvent::SuiteCompleted(Box::new(suite_result)))
        }
        MessageType::KillProcessRequest => Some(HostEvent::Kill),
        other => {
            tracing::debug!("Ignoring message: {:?}", other);
            None
        }
    }
}
