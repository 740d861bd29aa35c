use std::sync::Mutex;

use crate::domain::{AppError, TemplateContext};
use crate::ports::TemplateRenderer;

/// Returns `rendered:<template>` and records the namespaces it was given.
#[derive(Default)]
pub struct StubRenderer {
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TemplateRenderer for StubRenderer {
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((template_name.to_string(), context.keys().cloned().collect()));
        Ok(format!("rendered:{template_name}"))
    }
}
