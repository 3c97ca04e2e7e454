// Call recording endpoints
//
// `GetRecordings` searches the QA system and returns JSON metadata.
// `StreamRecording` returns the audio itself, which is copied chunk by
// chunk into a writer or a file named after the recording id.

use std::ffi::OsStr;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::client::FeneroClient;
use crate::error::Error;
use crate::operation::Operation;
use crate::reports::DateRange;

impl FeneroClient {
    /// Recordings within `range` for the given campaigns / ACD queues.
    ///
    /// `GET /MobileApi/GetRecordings`
    pub async fn get_recordings(
        &self,
        range: &DateRange,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<Value, Error> {
        let op = range
            .apply(Operation::new("GetRecordings"))
            .param_list("campaignIds", campaign_ids);
        self.perform_json(&op).await
    }

    /// Stream a recording's audio into `writer`, returning the byte count.
    ///
    /// The status is checked before anything is written, so a rejected
    /// request leaves the writer untouched.
    ///
    /// `GET /MobileApi/StreamRecording`
    pub async fn stream_recording_to<W>(
        &self,
        recording_id: &str,
        writer: &mut W,
    ) -> Result<usize, Error>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let resp = self.send(&stream_operation(recording_id)).await?;
        write_body(resp, writer, Path::new(recording_id)).await
    }

    /// Download a recording to `dest_dir/<recording_id>`.
    ///
    /// The file is only created once the server has accepted the request.
    /// If the transfer or a write fails afterwards, the partial file is
    /// removed and the error returned.
    pub async fn stream_recording(
        &self,
        recording_id: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, Error> {
        let file_name = recording_file_name(recording_id)?;
        let resp = self.send(&stream_operation(recording_id)).await?;

        let path = dest_dir.join(file_name);
        let target = path.as_path();
        let bytes = save_scoped(target, async move |file: &mut File| {
            write_body(resp, file, target).await
        })
        .await?;

        debug!(recording = recording_id, bytes, path = %path.display(), "recording saved");
        Ok(path)
    }
}

fn stream_operation(recording_id: &str) -> Operation {
    Operation::new("StreamRecording").param("recordingId", recording_id)
}

/// The recording id doubles as the local file name, so it must be a single
/// plain path component.
fn recording_file_name(recording_id: &str) -> Result<&str, Error> {
    let plain = Path::new(recording_id).file_name().and_then(OsStr::to_str) == Some(recording_id);
    if plain && !recording_id.contains('\\') {
        Ok(recording_id)
    } else {
        Err(Error::InvalidArgument(format!(
            "recording id {recording_id:?} is not usable as a file name"
        )))
    }
}

/// Copy every body chunk to `writer` in arrival order, then flush.
async fn write_body<W>(
    mut resp: reqwest::Response,
    writer: &mut W,
    target: &Path,
) -> Result<usize, Error>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let io_err = |source| Error::Io {
        path: target.to_path_buf(),
        source,
    };

    let mut written = 0;
    while let Some(chunk) = resp.chunk().await? {
        writer.write_all(&chunk).await.map_err(io_err)?;
        written += chunk.len();
    }
    writer.flush().await.map_err(io_err)?;
    Ok(written)
}

/// Create `path`, hand it to `write`, and guarantee the handle is closed
/// on every exit. A failed write removes whatever was written.
async fn save_scoped(
    path: &Path,
    write: impl AsyncFnOnce(&mut File) -> Result<usize, Error>,
) -> Result<usize, Error> {
    let mut file = File::create(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let result = write(&mut file).await;
    drop(file);

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "failed to remove partial recording");
        }
    }
    result
}
