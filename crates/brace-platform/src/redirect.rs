/// Performs full-page navigations requested by the pages.
pub trait Redirector {
    fn redirect(&mut self, url: &str) -> anyhow::Result<()>;
}

/// Native stand-in: logs and records every navigation.
#[derive(Debug, Default)]
pub struct LogRedirector {
    visited: Vec<String>,
}

impl LogRedirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Redirector for LogRedirector {
    fn redirect(&mut self, url: &str) -> anyhow::Result<()> {
        log::info!("redirect -> {url}");
        self.visited.push(url.to_string());
        Ok(())
    }
}
