//! Console session
//!
//! Drives a `UserDirectory` from any async line reader and writer.

use log::{debug, info, warn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::directory::UserDirectory;
use crate::shell::commands::{MenuChoice, ShellStatus, parse_choice};
use crate::shell::handlers::{
    handle_authenticate, handle_exit, handle_register, handle_remove, handle_unknown,
};
use crate::shell::responses;

/// Interactive menu loop over any line reader and writer.
///
/// - Prints the menu and reads an option line.
/// - Prompts for a username (and password where needed) and runs the operation.
/// - Prints the success or error line and repeats until option 4 or end of input.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    directory: UserDirectory,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, directory: UserDirectory) -> Self {
        Self {
            reader,
            writer,
            directory,
        }
    }

    pub fn into_parts(self) -> (R, W, UserDirectory) {
        (self.reader, self.writer, self.directory)
    }

    /// Runs the menu loop until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write(responses::MENU).await?;

            let Some(line) = self.prompt(responses::CHOICE_PROMPT).await? else {
                info!("Input closed, leaving menu loop");
                return Ok(());
            };

            let choice = parse_choice(&line);
            debug!("Menu choice: {:?}", choice);

            let result = match choice {
                MenuChoice::Register => {
                    let Some((username, password)) = self.prompt_credentials().await? else {
                        return Ok(());
                    };
                    handle_register(&mut self.directory, &username, &password)
                }
                MenuChoice::Remove => {
                    let Some(username) = self.prompt(responses::USERNAME_PROMPT).await? else {
                        return Ok(());
                    };
                    handle_remove(&mut self.directory, &username)
                }
                MenuChoice::Authenticate => {
                    let Some((username, password)) = self.prompt_credentials().await? else {
                        return Ok(());
                    };
                    handle_authenticate(&self.directory, &username, &password)
                }
                MenuChoice::Exit => handle_exit(),
                MenuChoice::Unknown => handle_unknown(),
            };

            if let Some(msg) = result.message {
                self.write_line(&msg).await?;
            }

            if result.status == ShellStatus::Exit {
                info!("Exit requested, {} users discarded", self.directory.len());
                return Ok(());
            }
        }
    }

    async fn prompt_credentials(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(username) = self.prompt(responses::USERNAME_PROMPT).await? else {
            return Ok(None);
        };
        let Some(password) = self.prompt(responses::PASSWORD_PROMPT).await? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    /// Prints `message` without a newline, then reads one line.
    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.write(message).await?;
        self.read_line().await
    }

    /// Reads one line with its terminator removed. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of ending the session.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }

        let mut line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.write("\n").await
    }
}
