use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use common::capabilities::{Dialog, PermissionProvider};
use common::models::Permission;
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub struct TerminalDialog;

#[async_trait]
impl Dialog for TerminalDialog {
    async fn alert(&self, message: &str) {
        println!("{}", message);
    }
}

/// Permission persisted in a one-word file (`granted` / `denied`). Delete it to be asked again.
pub struct FilePermissions<R> {
    path: PathBuf,
    supported: bool,
    answers: Mutex<R>,
}

impl<R> FilePermissions<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(path: impl Into<PathBuf>, supported: bool, answers: R) -> Self {
        Self {
            path: path.into(),
            supported,
            answers: Mutex::new(answers),
        }
    }

    async fn stored(&self) -> Permission {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring unreadable permission file {}", self.path.display());
                Permission::Default
            }),
            Err(_) => Permission::Default,
        }
    }

    async fn ask(&self) -> Permission {
        print!("Allow trading signal notifications? [y/n] ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let mut answers = self.answers.lock().await;
        match answers.read_line(&mut line).await {
            Ok(_) => parse_answer(&line),
            Err(e) => {
                warn!("Could not read permission answer: {}", e);
                Permission::Default
            }
        }
    }
}

fn parse_answer(line: &str) -> Permission {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Permission::Granted,
        "n" | "no" => Permission::Denied,
        _ => Permission::Default,
    }
}

#[async_trait]
impl<R> PermissionProvider for FilePermissions<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn permission(&self) -> Permission {
        self.stored().await
    }

    async fn request_permission(&self) -> Permission {
        let current = self.stored().await;
        if current != Permission::Default {
            debug!("Permission already decided: {}", current);
            return current;
        }

        let answer = self.ask().await;
        if answer != Permission::Default {
            if let Err(e) = fs::write(&self.path, answer.as_str()).await {
                warn!("Could not persist permission to {}: {}", self.path.display(), e);
            }
        }
        answer
    }
}
