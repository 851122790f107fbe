/// Where the UI goes after a successful submission.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

/// Remembers the last requested route so the caller can act on it.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub route: Option<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: &str) {
        log::debug!("navigate -> {route}");
        self.route = Some(route.to_string());
    }
}
