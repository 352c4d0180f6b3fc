use crate::constants::DATA_BUFFER_SIZE;
use crate::core_transfer::TransferError;
use crate::session::TransferMode;
use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// ASCII transfers clear the high bit of every byte. Line endings are left alone.
fn strip_high_bit(chunk: &mut [u8]) {
    for byte in chunk.iter_mut() {
        *byte &= 0x7F;
    }
}

/// Streams `file` to the data channel in `DATA_BUFFER_SIZE` chunks.
///
/// Returns the number of bytes sent.
pub async fn send_file<R, W>(file: &mut R, data: &mut W, mode: TransferMode) -> Result<u64, TransferError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0u8; DATA_BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .await
            .map_err(TransferError::FileRead)?;
        if bytes_read == 0 {
            break;
        }

        let chunk = &mut buffer[..bytes_read];
        if mode == TransferMode::Ascii {
            strip_high_bit(chunk);
        }
        data.write_all(chunk)
            .await
            .map_err(TransferError::DataChannel)?;
        total += bytes_read as u64;
    }

    data.flush().await.map_err(TransferError::DataChannel)?;
    debug!("Sent {} bytes in {} mode", total, mode.name());
    Ok(total)
}

/// Drains the data channel into `file` until the peer closes it.
///
/// A short or failed file write marks the transfer as failed but the channel
/// is still drained; a read error on the channel aborts at once. Bytes
/// already written stay written.
pub async fn receive_file<R, W>(data: &mut R, file: &mut W) -> Result<u64, TransferError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0u8; DATA_BUFFER_SIZE];
    let mut total = 0u64;
    let mut failure: Option<TransferError> = None;

    loop {
        let bytes_read = match data.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => return Err(TransferError::DataChannel(e)),
        };

        match file.write(&buffer[..bytes_read]).await {
            Ok(written) => {
                total += written as u64;
                if written != bytes_read {
                    warn!("Bytes read != bytes written ({}, {})", bytes_read, written);
                    failure.get_or_insert(TransferError::ShortWrite {
                        expected: bytes_read,
                        written,
                    });
                }
            }
            Err(e) => {
                warn!("Error writing to file: {}", e);
                failure.get_or_insert(TransferError::FileWrite(e));
            }
        }
    }

    if let Err(e) = file.flush().await {
        failure.get_or_insert(TransferError::FileWrite(e));
    }

    match failure {
        Some(e) => Err(e),
        None => {
            debug!("Received {} bytes", total);
            Ok(total)
        }
    }
}
