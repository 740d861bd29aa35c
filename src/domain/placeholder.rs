use std::fmt;
use std::sync::Arc;

use minijinja::Value;
use minijinja::value::Object;
use tracing::warn;

/// Template value for a namespace that is not filled in yet.
///
/// Any attribute access yields a deeper placeholder, and rendering writes the access
/// path back out as `<< a.b.c >>`, so the text survives for a later render pass.
#[derive(Debug, Clone)]
pub struct Placeholder {
    path: String,
}

impl Placeholder {
    pub fn new(namespace: &str) -> Self {
        Self { path: namespace.to_string() }
    }

    pub fn value(namespace: &str) -> Value {
        Value::from_object(Self::new(namespace))
    }

    fn child(&self, key: &str) -> Self {
        if self.path.is_empty() {
            Self { path: key.to_string() }
        } else {
            Self { path: format!("{}.{}", self.path, key) }
        }
    }

    /// The text this placeholder renders to.
    pub fn marker(&self) -> String {
        if self.path.is_empty() { "<< DUMMY >>".to_string() } else { format!("<< {} >>", self.path) }
    }
}

impl Object for Placeholder {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let key = key.as_str()?;
        Some(Value::from_object(self.child(key)))
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = self.marker();
        warn!("{marker} is a DUMMY!");
        f.write_str(&marker)
    }
}
