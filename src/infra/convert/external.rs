use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::traits::ConversionService;

/// Delegates conversion to an external program.
///
/// `<program> <args> generate` reads the definition on stdin and prints source;
/// `<program> <args> locations` reads source on stdin and prints the location JSON.
pub struct ExternalConverter {
    program: String,
    args: Vec<String>,
}

impl ExternalConverter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    async fn run(&self, subcommand: &str, input: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(subcommand)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("run `{} {}`", self.program, subcommand))?;

        // stdin is written while stdout drains, or large inputs fill the pipe.
        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(input.as_bytes()).await?;
            }
            Ok::<_, std::io::Error>(())
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output =
            output.with_context(|| format!("wait for `{} {}`", self.program, subcommand))?;
        if let Err(err) = fed {
            // A converter may exit without reading all of its input.
            log::debug!("`{} {}` closed stdin early: {err}", self.program, subcommand);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!(
                "`{} {}` failed: {}",
                self.program,
                subcommand,
                stderr.trim()
            ));
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("decode `{} {}` stdout", self.program, subcommand))
    }
}

#[async_trait]
impl ConversionService for ExternalConverter {
    fn id(&self) -> &str {
        "command"
    }

    async fn generate(&self, raw_definition: &str) -> Result<String> {
        self.run("generate", raw_definition).await
    }

    async fn extract_locations(&self, source_text: &str) -> Result<String> {
        self.run("locations", source_text).await
    }
}
