//! Scripted clipboard tool for orchestrator tests.

use super::mime::{TEXT_HTML, TEXT_PLAIN};
use super::result::ClipboardMethod;
use super::tool::{ClipboardTool, ToolError};

pub(crate) struct FakeTool {
    method: ClipboardMethod,
    available: bool,
    fails: bool,
    types: Vec<String>,
    text: String,
    html: Option<String>,
}

impl FakeTool {
    pub(crate) fn unavailable(method: ClipboardMethod) -> Self {
        Self {
            available: false,
            ..Self::text_only(method, "")
        }
    }

    pub(crate) fn failing(method: ClipboardMethod) -> Self {
        Self {
            fails: true,
            ..Self::text_only(method, "")
        }
    }

    pub(crate) fn text_only(method: ClipboardMethod, text: &str) -> Self {
        Self {
            method,
            available: true,
            fails: false,
            types: vec![TEXT_PLAIN.to_string()],
            text: text.to_string(),
            html: None,
        }
    }

    pub(crate) fn with_html(method: ClipboardMethod, types: &[&str], text: &str, html: &str) -> Self {
        Self {
            method,
            available: true,
            fails: false,
            types: types.iter().map(|t| t.to_string()).collect(),
            text: text.to_string(),
            html: Some(html.to_string()),
        }
    }

    fn check(&self) -> Result<(), ToolError> {
        if self.fails {
            Err(ToolError::Failed("scripted failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ClipboardTool for FakeTool {
    fn method(&self) -> ClipboardMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, _text: &str) -> Result<(), ToolError> {
        self.check()
    }

    fn try_read_types(&self) -> Result<Vec<String>, ToolError> {
        self.check()?;
        Ok(self.types.clone())
    }

    fn try_read(&self, mime: &str) -> Result<Option<String>, ToolError> {
        self.check()?;
        match mime {
            TEXT_PLAIN => Ok(Some(self.text.clone())),
            TEXT_HTML => match &self.html {
                Some(html) => Ok(Some(html.clone())),
                None => Err(ToolError::NotSupported),
            },
            _ => Err(ToolError::NotSupported),
        }
    }
}
