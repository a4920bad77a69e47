use std::io::{BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;

use crate::core::error::CutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// Exit state of a wrapped tool plus its accumulated stderr, kept so a
/// failure can be reported with the tool's own words.
#[derive(Debug)]
pub struct ToolOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Spawns `tool`, streams its stdout and stderr line by line into
/// `on_line`, and waits for it to exit. A non-zero exit is reported via
/// `ToolOutput`, not as an error; only spawn and wait failures error out.
pub fn run_streamed<F>(
    tool: &'static str,
    args: &[String],
    mut on_line: F,
) -> Result<ToolOutput, CutError>
where
    F: FnMut(StreamKind, &str),
{
    let mut cmd = Command::new(tool);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            CutError::BinaryNotFound { tool }
        } else {
            CutError::Io(err)
        }
    })?;

    let (line_tx, line_rx) = mpsc::channel::<(StreamKind, String)>();

    let stdout_handle = child
        .stdout
        .take()
        .map(|stdout| spawn_line_reader(StreamKind::Stdout, stdout, line_tx.clone()));
    let stderr_handle = child
        .stderr
        .take()
        .map(|stderr| spawn_line_reader(StreamKind::Stderr, stderr, line_tx.clone()));
    drop(line_tx);

    let mut stderr_buf = String::new();
    for (stream, line) in line_rx {
        if stream == StreamKind::Stderr {
            stderr_buf.push_str(&line);
            stderr_buf.push('\n');
        }
        on_line(stream, &line);
    }

    if let Some(handle) = stdout_handle {
        let _ = handle.join();
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.join();
    }

    let status = child.wait()?;

    Ok(ToolOutput {
        success: status.success(),
        exit_code: status.code(),
        stderr: stderr_buf,
    })
}

fn spawn_line_reader<R: Read + Send + 'static>(
    stream: StreamKind,
    reader: R,
    sender: Sender<(StreamKind, String)>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut line_buf: Vec<u8> = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match reader.read(&mut byte) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }

            // both tools rewrite progress in place with `\r`, so it
            // counts as a line terminator here
            if byte[0] == b'\r' || byte[0] == b'\n' {
                flush_line(stream, &mut line_buf, &sender);
            } else {
                line_buf.push(byte[0]);
            }
        }

        flush_line(stream, &mut line_buf, &sender);
    })
}

fn flush_line(stream: StreamKind, buf: &mut Vec<u8>, sender: &Sender<(StreamKind, String)>) {
    if buf.is_empty() {
        return;
    }

    let line = String::from_utf8_lossy(buf).trim().to_string();
    buf.clear();

    if !line.is_empty() {
        let _ = sender.send((stream, line));
    }
}
