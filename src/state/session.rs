#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStep {
    #[default]
    Checking,
    Disconnected,
    Connected,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub step: ConnectionStep,
    pub display_name: Option<String>,
    /// Name mirrored from session storage, shown while `/api/me` is pending.
    pub remembered_name: Option<String>,
    pub logging_out: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn begin_check(&mut self, remembered_name: Option<String>) {
        self.step = ConnectionStep::Checking;
        self.remembered_name = remembered_name.filter(|name| !name.trim().is_empty());
        self.error = None;
    }

    pub fn connect(&mut self, display_name: Option<String>) {
        self.step = ConnectionStep::Connected;
        self.display_name = display_name;
        self.remembered_name = None;
        self.logging_out = false;
        self.error = None;
    }

    pub fn disconnect(&mut self) {
        self.step = ConnectionStep::Disconnected;
        self.display_name = None;
        self.remembered_name = None;
        self.logging_out = false;
    }

    pub fn is_connected(&self) -> bool {
        self.step == ConnectionStep::Connected
    }

    pub fn status_text(&self) -> String {
        match self.step {
            ConnectionStep::Checking => match &self.remembered_name {
                Some(name) => format!("Reconnecting as {name}..."),
                None => "Checking connection...".to_string(),
            },
            ConnectionStep::Disconnected => "Not connected".to_string(),
            ConnectionStep::Connected => format!(
                "Connected as {}",
                self.display_name.as_deref().unwrap_or("Spotify user")
            ),
        }
    }
}
